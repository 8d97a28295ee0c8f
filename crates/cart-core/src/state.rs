//! Application State
//!
//! Holds the last inventory and cart the backend returned. Every write
//! replaces the whole sequence and synchronously calls the subscriber.

use std::fmt;

use crate::models::{CartItem, InventoryItem, ItemId};

type Listener = Box<dyn FnMut(&[InventoryItem], &[CartItem])>;

/// Observed inventory and cart
///
/// There is a single subscriber slot: subscribing again replaces the
/// previous callback.
#[derive(Default)]
pub struct State {
    inventory: Vec<InventoryItem>,
    cart: Vec<CartItem>,
    on_change: Option<Listener>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn set_inventory(&mut self, inventory: Vec<InventoryItem>) {
        self.inventory = inventory;
        self.notify();
    }

    pub fn set_cart(&mut self, cart: Vec<CartItem>) {
        self.cart = cart;
        self.notify();
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[InventoryItem], &[CartItem]) + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    pub fn find_inventory(&self, id: ItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    pub fn find_cart(&self, id: ItemId) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.id == id)
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.inventory, &self.cart);
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("inventory", &self.inventory)
            .field("cart", &self.cart)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn apple() -> InventoryItem {
        InventoryItem { id: ItemId(1), content: "Apple".to_string() }
    }

    #[test]
    fn test_starts_empty() {
        let state = State::new();
        assert!(state.inventory().is_empty());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_write_without_subscriber() {
        let mut state = State::new();
        state.set_inventory(vec![apple()]);
        assert_eq!(state.inventory().len(), 1);
    }

    #[test]
    fn test_every_write_notifies_with_current_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = State::new();
        let log = seen.clone();
        state.subscribe(move |inventory, cart| {
            log.borrow_mut().push((inventory.len(), cart.len()))
        });

        state.set_inventory(vec![apple()]);
        state.set_cart(vec![CartItem::from_inventory(&apple(), 3)]);
        state.set_cart(Vec::new());

        assert_eq!(*seen.borrow(), vec![(1, 0), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_last_subscriber_wins() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut state = State::new();

        let counter = first.clone();
        state.subscribe(move |_, _| *counter.borrow_mut() += 1);
        let counter = second.clone();
        state.subscribe(move |_, _| *counter.borrow_mut() += 1);

        state.set_cart(Vec::new());
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut state = State::new();
        state.set_inventory(vec![apple()]);
        state.set_cart(vec![CartItem::from_inventory(&apple(), 2)]);
        assert_eq!(state.find_inventory(ItemId(1)).map(|i| i.content.as_str()), Some("Apple"));
        assert_eq!(state.find_cart(ItemId(1)).map(|i| i.amount), Some(2));
        assert!(state.find_cart(ItemId(9)).is_none());
    }
}
