//! Loads the orders to prepare from a JSON file

use log::{debug, error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::CooLexError;
use crate::order::OrderSelection;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    base: usize,
    protein: usize,
    toppings: Vec<usize>,
    sauce: usize,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn parse_orders_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn to_selections(json_orders: Vec<JsonOrder>) -> Vec<OrderSelection> {
    let mut selections = Vec::new();
    for (id, order) in json_orders.into_iter().enumerate() {
        debug!("[READER] Added order {} {:?}", id, order);
        selections.push(OrderSelection::new(
            order.base,
            order.protein,
            order.toppings,
            order.sauce,
        ));
    }
    info!("[READER] {} orders loaded", selections.len());
    selections
}

pub fn read_orders_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<OrderSelection>, CooLexError> {
    match parse_orders_file(path) {
        Ok(json_orders) => Ok(to_selections(json_orders)),
        Err(e) => {
            error!("[READER] Error while reading the orders file: {}", e);
            Err(CooLexError::FileReaderError)
        }
    }
}
