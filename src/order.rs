//! Representation of one customer order

/// The choices of a single customer, as indices into the catalog:
/// one base, one protein, one or more toppings and one sauce shared by the whole bowl.
#[derive(Debug)]
pub struct OrderSelection {
    pub base: usize,
    pub protein: usize,
    pub toppings: Vec<usize>,
    pub sauce: usize,
}

impl OrderSelection {
    pub fn new(base: usize, protein: usize, toppings: Vec<usize>, sauce: usize) -> OrderSelection {
        OrderSelection {
            base,
            protein,
            toppings,
            sauce,
        }
    }
}
