//! Loads the static ingredient catalog from a JSON file

use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::CooLexError;
use crate::ingredient::Ingredient;
use crate::position::Position;

#[derive(Deserialize, Debug)]
struct JsonIngredient {
    name: String,
    total_stock: u64,
    quantity: u64,
    position: [f64; 2],
}

#[derive(Deserialize)]
struct CatalogConfiguration {
    bowls: JsonIngredient,
    bases: Vec<JsonIngredient>,
    proteins: Vec<JsonIngredient>,
    toppings: Vec<JsonIngredient>,
    sauces: Vec<JsonIngredient>,
}

/// Ingredient ledgers the station is bootstrapped with, one group per catalog level
pub struct CatalogData {
    pub bowl: Ingredient,
    pub bases: Vec<Ingredient>,
    pub proteins: Vec<Ingredient>,
    pub toppings: Vec<Ingredient>,
    pub sauces: Vec<Ingredient>,
}

fn parse_catalog_file<P: AsRef<Path>>(path: P) -> Result<CatalogConfiguration, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let configuration: CatalogConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration)
}

fn to_ingredient(json: JsonIngredient) -> Ingredient {
    Ingredient::new(
        &json.name,
        json.total_stock,
        json.quantity,
        Position::new(json.position[0], json.position[1]),
    )
}

fn to_group(group: Vec<JsonIngredient>) -> Vec<Ingredient> {
    group.into_iter().map(to_ingredient).collect()
}

pub fn read_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<CatalogData, CooLexError> {
    match parse_catalog_file(path) {
        Ok(configuration) => {
            let data = CatalogData {
                bowl: to_ingredient(configuration.bowls),
                bases: to_group(configuration.bases),
                proteins: to_group(configuration.proteins),
                toppings: to_group(configuration.toppings),
                sauces: to_group(configuration.sauces),
            };
            info!(
                "[READER] Catalog loaded with {} bases, {} proteins, {} toppings, {} sauces",
                data.bases.len(),
                data.proteins.len(),
                data.toppings.len(),
                data.sauces.len()
            );
            Ok(data)
        }
        Err(e) => {
            error!("[READER] Error while reading the catalog file: {}", e);
            Err(CooLexError::FileReaderError)
        }
    }
}
