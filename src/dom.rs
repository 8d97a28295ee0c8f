//! DOM Helpers
//!
//! Event delegation plumbing: find which row control was hit and which item
//! it belongs to. `data-id` is parsed into an `ItemId` here and nowhere else.

use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use cart_core::{ItemId, StagedAmount};

/// Row control, identified by class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Decrement,
    Increment,
    AddToCart,
    Delete,
}

impl RowAction {
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            "minus-btn" => Some(RowAction::Decrement),
            "plus-btn" => Some(RowAction::Increment),
            "add-to-cart-btn" => Some(RowAction::AddToCart),
            "delete-btn" => Some(RowAction::Delete),
            _ => None,
        })
    }
}

pub fn parse_data_id(raw: Option<&str>) -> Option<ItemId> {
    raw?.parse().ok()
}

/// Element the event was dispatched to, with its item id
pub fn event_row(ev: &Event) -> Option<(Element, ItemId)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let id = parse_data_id(target.get_attribute("data-id").as_deref())?;
    Some((target, id))
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|c| c == class)
}

pub fn amount_input_selector(id: ItemId) -> String {
    format!(".amount-input[data-id=\"{}\"]", id)
}

/// Show a staged amount in the row's input
pub fn write_amount_input(id: ItemId, amount: StagedAmount) {
    let input = document()
        .query_selector(&amount_input_selector(id))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    match input {
        Some(input) => input.set_value(&amount.to_string()),
        None => log::warn!("no amount input for item {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_action_matches_class_names() {
        assert_eq!(RowAction::from_class_list("minus-btn"), Some(RowAction::Decrement));
        assert_eq!(RowAction::from_class_list("plus-btn"), Some(RowAction::Increment));
        assert_eq!(RowAction::from_class_list("btn add-to-cart-btn"), Some(RowAction::AddToCart));
        assert_eq!(RowAction::from_class_list("delete-btn"), Some(RowAction::Delete));
        assert_eq!(RowAction::from_class_list("amount-input"), None);
        assert_eq!(RowAction::from_class_list(""), None);
    }

    #[test]
    fn test_data_id_parsed_once() {
        assert_eq!(parse_data_id(Some("3")), Some(ItemId(3)));
        assert_eq!(parse_data_id(Some("x")), None);
        assert_eq!(parse_data_id(None), None);
    }

    #[test]
    fn test_amount_input_selector() {
        assert_eq!(amount_input_selector(ItemId(5)), ".amount-input[data-id=\"5\"]");
    }
}
