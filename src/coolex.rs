//! The CooLex station. Resolves orders against the catalog tree and executes
//! them, moving the dispensing head between stations and depleting the ledgers.

use log::{debug, warn};

use crate::{
    catalog::{build_catalog, resolve_path, CatalogNode},
    constants::{
        BOWL_DISPENSER_POSITION, FINAL_POSITION, INITIAL_POSITION, STOCK_ALERT_PERCENTAGE,
    },
    errors::CooLexError,
    ingredient::Ingredient,
    order::OrderSelection,
    position::Position,
};

/// Which nodes of the catalog `prepare_bowl` services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraversalMode {
    /// Only the stations of the resolved selection
    SelectedPath,
    /// Every station in the catalog, in tree pre-order. This is what the
    /// legacy firmware did: the resolved path only validated the selection
    /// and was then discarded. Kept behind this flag for comparison runs.
    FullCatalog,
}

/// Per-order state of the dispensing head
struct ExecutionState {
    head: Position,
    distance: f64,
}

impl ExecutionState {
    fn new() -> ExecutionState {
        ExecutionState {
            head: INITIAL_POSITION,
            distance: 0.0,
        }
    }

    fn move_to(&mut self, target: Position) {
        self.distance += self.head.distance_to(&target);
        self.head = target;
    }
}

/// Outcome of a successfully prepared bowl
#[derive(Debug, PartialEq)]
pub struct OrderSummary {
    pub total_distance: f64,
}

/// Owns the ingredient ledgers and the catalog tree for one run.
/// Orders are prepared one at a time, start to finish.
pub struct CooLex {
    ingredients: Vec<Ingredient>,
    root: CatalogNode,
    mode: TraversalMode,
}

impl CooLex {
    pub fn new(
        bowl: Ingredient,
        bases: Vec<Ingredient>,
        proteins: Vec<Ingredient>,
        toppings: Vec<Ingredient>,
        sauces: Vec<Ingredient>,
        mode: TraversalMode,
    ) -> CooLex {
        let mut ingredients = vec![bowl];
        let base_ids = push_group(&mut ingredients, bases);
        let protein_ids = push_group(&mut ingredients, proteins);
        let topping_ids = push_group(&mut ingredients, toppings);
        let sauce_ids = push_group(&mut ingredients, sauces);
        let root = build_catalog(
            &ingredients,
            0,
            &base_ids,
            &protein_ids,
            &topping_ids,
            &sauce_ids,
        );
        CooLex {
            ingredients,
            root,
            mode,
        }
    }

    /// Prepares one bowl. The selection is validated against the catalog
    /// before any stock is touched; from then on the head picks up the bowl,
    /// services the stations of the traversal sequence and delivers. On the
    /// first exhausted ingredient the order aborts with
    /// `InsufficientStock`, keeping whatever was already consumed.
    pub fn prepare_bowl(&mut self, selection: &OrderSelection) -> Result<OrderSummary, CooLexError> {
        let path = resolve_path(&self.root, selection)?;

        let mut state = ExecutionState::new();
        state.move_to(BOWL_DISPENSER_POSITION);
        match self.mode {
            TraversalMode::SelectedPath => {
                for node in path {
                    visit_node(node, &mut self.ingredients, &mut state)?;
                }
            }
            TraversalMode::FullCatalog => {
                traverse_catalog(&self.root, &mut self.ingredients, &mut state)?;
            }
        }
        state.move_to(FINAL_POSITION);
        debug!(
            "[COOLEX] Bowl delivered, head traveled {:.2}",
            state.distance
        );
        Ok(OrderSummary {
            total_distance: state.distance,
        })
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

fn push_group(ingredients: &mut Vec<Ingredient>, group: Vec<Ingredient>) -> Vec<usize> {
    group
        .into_iter()
        .map(|ingredient| {
            ingredients.push(ingredient);
            ingredients.len() - 1
        })
        .collect()
}

/// Services one station: moves the head there, consumes one use of stock and
/// runs the threshold check. Structural nodes are skipped. The head move is
/// applied before the consumption attempt, so an aborted order still
/// accounts the travel to the exhausted station.
fn visit_node(
    node: &CatalogNode,
    ingredients: &mut [Ingredient],
    state: &mut ExecutionState,
) -> Result<(), CooLexError> {
    let id = match node.ingredient() {
        Some(id) => id,
        None => return Ok(()),
    };
    state.move_to(ingredients[id].position());
    debug!(
        "[COOLEX] Head at the {} station, distance so far {:.2}",
        ingredients[id].name(),
        state.distance
    );
    ingredients[id].consume()?;
    if node.stock_check() {
        check_and_alert(&ingredients[id]);
    }
    Ok(())
}

fn traverse_catalog(
    node: &CatalogNode,
    ingredients: &mut [Ingredient],
    state: &mut ExecutionState,
) -> Result<(), CooLexError> {
    visit_node(node, ingredients, state)?;
    for child in node.children() {
        traverse_catalog(child, ingredients, state)?;
    }
    Ok(())
}

/// Reports an ingredient that dropped below the alert threshold. Observer
/// only, orders are never blocked by a low-stock condition.
fn check_and_alert(ingredient: &Ingredient) {
    if ingredient.is_below_threshold(STOCK_ALERT_PERCENTAGE) {
        warn!(
            "[ALERT] Stock of {} is below the threshold",
            ingredient.name()
        );
    }
}
