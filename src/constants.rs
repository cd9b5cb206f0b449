//! Configuration parameters of the CooLex station

use crate::coolex::TraversalMode;
use crate::position::Position;

/// Percentage of original capacity below which a stock alert is raised for an ingredient
pub const STOCK_ALERT_PERCENTAGE: f64 = 20.0;

/// Where the dispensing head rests before an order starts
pub const INITIAL_POSITION: Position = Position { x: 0.0, y: 0.0 };

/// Station where the empty bowl is picked up at the start of every order
pub const BOWL_DISPENSER_POSITION: Position = Position { x: 0.0, y: 2.0 };

/// Station where the finished bowl is delivered
pub const FINAL_POSITION: Position = Position { x: 20.0, y: 0.0 };

/// Which part of the catalog tree `prepare_bowl` executes.
/// `FullCatalog` reproduces the legacy whole-tree behaviour.
pub const TRAVERSAL_MODE: TraversalMode = TraversalMode::SelectedPath;

/// File with the ingredient catalog (stocks, quantities and station coordinates)
pub const CATALOG_FILE: &str = "catalog.json";

/// File with the orders to prepare
pub const ORDERS_FILE: &str = "orders.json";
