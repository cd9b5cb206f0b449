//! Stock ledger of a single ingredient type

use crate::errors::CooLexError;
use crate::position::Position;

/// Tracks the remaining stock of one ingredient and where its dispenser is.
/// `stock` only changes through [`Ingredient::consume`], so `0 <= stock <= total_stock`
/// holds for the whole run. `quantity` is the fixed amount taken per use.
pub struct Ingredient {
    name: String,
    total_stock: u64,
    stock: u64,
    quantity: u64,
    position: Position,
}

impl Ingredient {
    pub fn new(name: &str, total_stock: u64, quantity: u64, position: Position) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            total_stock,
            stock: total_stock,
            quantity,
            position,
        }
    }

    /// Takes one use worth of stock. Fails without touching the ledger
    /// when less than `quantity` remains.
    pub fn consume(&mut self) -> Result<(), CooLexError> {
        if self.stock < self.quantity {
            return Err(CooLexError::InsufficientStock(self.name.clone()));
        }
        self.stock -= self.quantity;
        Ok(())
    }

    /// True when the remaining stock ratio dropped below `percentage` of the
    /// original capacity. A ratio is used instead of an absolute count because
    /// capacities differ a lot between ingredient types.
    pub fn is_below_threshold(&self, percentage: f64) -> bool {
        self.stock as f64 * 100.0 < self.total_stock as f64 * percentage
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn total_stock(&self) -> u64 {
        self.total_stock
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
