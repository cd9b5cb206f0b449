//! Catalog tree of every orderable bowl combination

use crate::errors::CooLexError;
use crate::ingredient::Ingredient;
use crate::order::OrderSelection;

/// One node of the combination tree. Ingredient-bearing nodes reference their
/// ledger by index into the station's ingredient list, the synthetic root
/// carries none. The tree is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogNode {
    label: String,
    ingredient: Option<usize>,
    stock_check: bool,
    children: Vec<CatalogNode>,
}

impl CatalogNode {
    fn structural(label: &str) -> CatalogNode {
        CatalogNode {
            label: label.to_string(),
            ingredient: None,
            stock_check: false,
            children: Vec::new(),
        }
    }

    fn dispensing(label: &str, ingredient: usize) -> CatalogNode {
        CatalogNode {
            label: label.to_string(),
            ingredient: Some(ingredient),
            stock_check: true,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ingredient(&self) -> Option<usize> {
        self.ingredient
    }

    pub fn stock_check(&self) -> bool {
        self.stock_check
    }

    pub fn children(&self) -> &[CatalogNode] {
        &self.children
    }
}

/// Builds the full cartesian-product tree
/// `Start -> Bowl -> {bases} -> {proteins} -> {toppings} -> {sauces}`.
/// Every base gets its own copy of all proteins, every protein of all
/// toppings, every topping of all sauces. Child order follows the order of
/// the id slices, so rebuilding from the same catalog yields the same shape.
pub fn build_catalog(
    ingredients: &[Ingredient],
    bowl: usize,
    bases: &[usize],
    proteins: &[usize],
    toppings: &[usize],
    sauces: &[usize],
) -> CatalogNode {
    let sauce_nodes: Vec<CatalogNode> = sauces
        .iter()
        .map(|&id| CatalogNode::dispensing(ingredients[id].name(), id))
        .collect();
    let topping_nodes = level_with_children(ingredients, toppings, &sauce_nodes);
    let protein_nodes = level_with_children(ingredients, proteins, &topping_nodes);
    let base_nodes = level_with_children(ingredients, bases, &protein_nodes);

    let mut bowl_node = CatalogNode::dispensing("Bowl", bowl);
    bowl_node.children = base_nodes;
    let mut root = CatalogNode::structural("Start");
    root.children.push(bowl_node);
    root
}

fn level_with_children(
    ingredients: &[Ingredient],
    ids: &[usize],
    children: &[CatalogNode],
) -> Vec<CatalogNode> {
    ids.iter()
        .map(|&id| {
            let mut node = CatalogNode::dispensing(ingredients[id].name(), id);
            node.children = children.to_vec();
            node
        })
        .collect()
}

/// Maps a customer selection to the concrete node sequence to fulfill:
/// the bowl, the chosen base, its chosen protein child, the chosen toppings
/// and one sauce shared by the whole bowl, taken under the first resolved
/// topping. Topping indices are looked up in descending order, so later
/// slots are resolved first (kept for compatibility with the legacy
/// station firmware). Fails with `IndexOutOfRange` before any ledger is
/// touched if a choice does not exist in the catalog.
pub fn resolve_path<'a>(
    root: &'a CatalogNode,
    selection: &OrderSelection,
) -> Result<Vec<&'a CatalogNode>, CooLexError> {
    let bowl_node = root.children.first().ok_or(CooLexError::IndexOutOfRange)?;
    let base_node = bowl_node
        .children
        .get(selection.base)
        .ok_or(CooLexError::IndexOutOfRange)?;
    let protein_node = base_node
        .children
        .get(selection.protein)
        .ok_or(CooLexError::IndexOutOfRange)?;

    let mut topping_indices = selection.toppings.clone();
    topping_indices.sort_unstable_by(|a, b| b.cmp(a));

    let mut path = vec![bowl_node, base_node, protein_node];
    let mut first_topping: Option<&CatalogNode> = None;
    for index in topping_indices {
        let topping_node = protein_node
            .children
            .get(index)
            .ok_or(CooLexError::IndexOutOfRange)?;
        first_topping.get_or_insert(topping_node);
        path.push(topping_node);
    }

    // an order without toppings leaves the sauce with no parent to resolve under
    let sauce_parent = first_topping.ok_or(CooLexError::IndexOutOfRange)?;
    let sauce_node = sauce_parent
        .children
        .get(selection.sauce)
        .ok_or(CooLexError::IndexOutOfRange)?;
    path.push(sauce_node);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn some_catalog() -> (Vec<Ingredient>, CatalogNode) {
        let names = [
            "bowls", "arros", "quinoa", "pollastre", "gall dindi", "vedella", "nous", "mango",
            "alvocat", "tartufata", "chimichurri",
        ];
        let ingredients: Vec<Ingredient> = names
            .iter()
            .map(|name| Ingredient::new(name, 100, 10, Position::new(0.0, 0.0)))
            .collect();
        let root = build_catalog(
            &ingredients,
            0,
            &[1, 2],
            &[3, 4, 5],
            &[6, 7, 8],
            &[9, 10],
        );
        (ingredients, root)
    }

    fn labels(nodes: &[&CatalogNode]) -> Vec<String> {
        nodes.iter().map(|node| node.label().to_string()).collect()
    }

    fn count_nodes(node: &CatalogNode) -> usize {
        1 + node.children().iter().map(count_nodes).sum::<usize>()
    }

    #[test]
    fn should_build_the_tree_with_the_catalog_ordering_on_every_level() {
        let (_, root) = some_catalog();
        assert_eq!("Start", root.label());
        assert_eq!(None, root.ingredient());
        let bowl = &root.children()[0];
        assert_eq!("Bowl", bowl.label());
        assert_eq!(Some(0), bowl.ingredient());
        assert_eq!(true, bowl.stock_check());
        let base_labels: Vec<&str> = bowl.children().iter().map(|n| n.label()).collect();
        assert_eq!(vec!["arros", "quinoa"], base_labels);
        let protein_labels: Vec<&str> = bowl.children()[1]
            .children()
            .iter()
            .map(|n| n.label())
            .collect();
        assert_eq!(vec!["pollastre", "gall dindi", "vedella"], protein_labels);
    }

    #[test]
    fn should_give_every_branch_a_full_copy_of_the_next_level() {
        let (_, root) = some_catalog();
        // 1 root + 1 bowl + 2 bases + 2*3 proteins + 2*3*3 toppings + 2*3*3*2 sauces
        assert_eq!(1 + 1 + 2 + 6 + 18 + 36, count_nodes(&root));
        for base in root.children()[0].children() {
            assert_eq!(3, base.children().len());
            for protein in base.children() {
                assert_eq!(3, protein.children().len());
                for topping in protein.children() {
                    assert_eq!(2, topping.children().len());
                }
            }
        }
    }

    #[test]
    fn should_build_the_same_tree_when_called_twice_with_the_same_catalog() {
        let (ingredients, first) = some_catalog();
        let second = build_catalog(
            &ingredients,
            0,
            &[1, 2],
            &[3, 4, 5],
            &[6, 7, 8],
            &[9, 10],
        );

        fn preorder_labels(node: &CatalogNode, out: &mut Vec<String>) {
            out.push(node.label().to_string());
            for child in node.children() {
                preorder_labels(child, out);
            }
        }
        let mut first_labels = Vec::new();
        let mut second_labels = Vec::new();
        preorder_labels(&first, &mut first_labels);
        preorder_labels(&second, &mut second_labels);
        assert_eq!(first_labels, second_labels);
        assert_eq!(count_nodes(&first), count_nodes(&second));
    }

    #[test]
    fn should_resolve_the_selected_nodes_in_order() {
        let (_, root) = some_catalog();
        let selection = OrderSelection::new(1, 0, vec![2], 1);
        let path = resolve_path(&root, &selection).expect("valid selection");
        assert_eq!(
            vec!["Bowl", "quinoa", "pollastre", "alvocat", "chimichurri"],
            labels(&path)
        );
    }

    #[test]
    fn should_resolve_toppings_with_the_highest_index_first() {
        let (_, root) = some_catalog();
        let selection = OrderSelection::new(0, 1, vec![0, 2, 1], 0);
        let path = resolve_path(&root, &selection).expect("valid selection");
        assert_eq!(
            vec![
                "Bowl",
                "arros",
                "gall dindi",
                "alvocat",
                "mango",
                "nous",
                "tartufata"
            ],
            labels(&path)
        );
    }

    #[test]
    fn should_take_one_sauce_for_the_whole_bowl_regardless_of_topping_count() {
        let (_, root) = some_catalog();
        let selection = OrderSelection::new(0, 0, vec![0, 1, 2], 1);
        let path = resolve_path(&root, &selection).expect("valid selection");
        let sauce_count = path
            .iter()
            .filter(|node| node.label() == "chimichurri")
            .count();
        assert_eq!(1, sauce_count);
    }

    #[test]
    fn should_fail_when_any_selection_index_is_out_of_bounds() {
        let (_, root) = some_catalog();
        let out_of_range = [
            OrderSelection::new(2, 0, vec![0], 0),
            OrderSelection::new(0, 3, vec![0], 0),
            OrderSelection::new(0, 0, vec![3], 0),
            OrderSelection::new(0, 0, vec![0], 2),
        ];
        for selection in out_of_range {
            assert_eq!(
                Err(CooLexError::IndexOutOfRange),
                resolve_path(&root, &selection)
            );
        }
    }

    #[test]
    fn should_fail_when_the_order_has_no_toppings() {
        let (_, root) = some_catalog();
        let selection = OrderSelection::new(0, 0, Vec::new(), 0);
        assert_eq!(
            Err(CooLexError::IndexOutOfRange),
            resolve_path(&root, &selection)
        );
    }
}
