//! Run statistics of the station

use crate::ingredient::Ingredient;

/// Counts processed orders and prints the state of every ledger at the end of a run
pub struct StatisticsPrinter {
    processed: u64,
}

impl StatisticsPrinter {
    pub fn new() -> StatisticsPrinter {
        StatisticsPrinter { processed: 0 }
    }

    pub fn register_processed_order(&mut self) {
        self.processed += 1;
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn print_statistics(&self, ingredients: &[Ingredient]) {
        let mut statistics = format!(
            "[STATISTICS] Orders processed={} | Ingredient=(remaining, consumed) |",
            self.processed
        );
        for ingredient in ingredients {
            statistics.push_str(&format!(
                " {}=({},{}) ",
                ingredient.name(),
                ingredient.stock(),
                ingredient.total_stock() - ingredient.stock()
            ));
        }
        println!("{}", statistics);
    }
}
