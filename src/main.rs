pub mod catalog;
pub mod catalog_reader;
pub mod constants;
pub mod coolex;
pub mod errors;
pub mod ingredient;
pub mod order;
pub mod orders_reader;
pub mod position;
pub mod statistics;

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use crate::catalog_reader::read_catalog_from_file;
use crate::constants::{CATALOG_FILE, ORDERS_FILE, TRAVERSAL_MODE};
use crate::coolex::CooLex;
use crate::orders_reader::read_orders_from_file;
use crate::statistics::StatisticsPrinter;

fn main() {
    if SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .is_err()
    {
        println!("Could not set up the logger");
        return;
    }

    let catalog = match read_catalog_from_file(CATALOG_FILE) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("[COOLEX] Could not load the catalog, {:?}", e);
            return;
        }
    };
    let orders = match read_orders_from_file(ORDERS_FILE) {
        Ok(orders) => orders,
        Err(e) => {
            error!("[COOLEX] Could not load the orders, {:?}", e);
            return;
        }
    };

    let mut coolex = CooLex::new(
        catalog.bowl,
        catalog.bases,
        catalog.proteins,
        catalog.toppings,
        catalog.sauces,
        TRAVERSAL_MODE,
    );
    let mut statistics = StatisticsPrinter::new();
    // a failed order only loses that order, the station keeps serving
    for (id, selection) in orders.iter().enumerate() {
        match coolex.prepare_bowl(selection) {
            Ok(summary) => {
                info!(
                    "[COOLEX] Order {} prepared successfully, head traveled {:.2}",
                    id, summary.total_distance
                );
                statistics.register_processed_order();
            }
            Err(e) => error!("[COOLEX] Order {} failed, {:?}", id, e),
        }
    }
    statistics.print_statistics(coolex.ingredients());
}
