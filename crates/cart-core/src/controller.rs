//! Cart Controller
//!
//! Owns the state and staging, turns user actions into API calls and
//! re-fetches the canonical cart after every mutation. The state only ever
//! holds what the backend last returned.
//!
//! Nothing is retried and requests are never cancelled. Two overlapping
//! "Add to Cart" clicks on the same row each read the cart they saw at
//! click time, so the later response wins.

use std::cell::{Ref, RefCell};

use futures::join;

use crate::api::CartApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{CartItem, InventoryItem, ItemId};
use crate::staging::{StagedAmount, Staging};
use crate::state::State;

/// Backend mutation that "Add to Cart" resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// Item not in the cart yet
    Add(CartItem),
    /// Item already in the cart; `amount` is the new cumulative total
    Update { id: ItemId, amount: u32 },
}

/// Decide what "Add to Cart" does for `id` given the staged amount.
///
/// `Ok(None)` when there is nothing to commit. Staged amounts add to an
/// existing cart entry instead of overwriting it.
pub fn plan_add_to_cart(
    state: &State,
    id: ItemId,
    staged: StagedAmount,
) -> ApiResult<Option<CartChange>> {
    let Some(amount) = staged.committable() else {
        return Ok(None);
    };
    if let Some(existing) = state.find_cart(id) {
        return Ok(Some(CartChange::Update {
            id,
            amount: existing.amount.saturating_add(amount),
        }));
    }
    let item = state.find_inventory(id).ok_or(ApiError::NotFound(id))?;
    Ok(Some(CartChange::Add(CartItem::from_inventory(item, amount))))
}

pub struct Controller<A> {
    api: A,
    state: RefCell<State>,
    staging: RefCell<Staging>,
}

impl<A: CartApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(State::new()),
            staging: RefCell::new(Staging::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> Ref<'_, State> {
        self.state.borrow()
    }

    /// Register the renderer. Called synchronously on every state write;
    /// it must not call back into the controller.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: FnMut(&[InventoryItem], &[CartItem]) + 'static,
    {
        self.state.borrow_mut().subscribe(listener);
    }

    /// Fetch inventory and cart once each and assign whichever arrived.
    pub async fn init(&self) -> ApiResult<()> {
        let (inventory, cart) = join!(self.api.get_inventory(), self.api.get_cart());
        let inventory = inventory.map(|items| self.assign(|state| state.set_inventory(items)));
        let cart = cart.map(|items| self.assign(|state| state.set_cart(items)));
        log::info!(
            "initialized: {} inventory items, {} cart entries",
            self.state().inventory().len(),
            self.state().cart().len()
        );
        inventory.and(cart)
    }

    // ========================
    // Staging
    // ========================

    pub fn staged(&self, id: ItemId) -> StagedAmount {
        self.staging.borrow().get(id)
    }

    pub fn increment(&self, id: ItemId) -> StagedAmount {
        self.staging.borrow_mut().increment(id)
    }

    /// `None` when nothing changed; the input should then keep its text.
    pub fn decrement(&self, id: ItemId) -> Option<StagedAmount> {
        self.staging.borrow_mut().decrement(id)
    }

    pub fn stage_text(&self, id: ItemId, text: &str) -> StagedAmount {
        self.staging.borrow_mut().set_text(id, text)
    }

    // ========================
    // Cart actions
    // ========================

    /// Commit the staged amount of row `id`. No request is made when the
    /// staged amount is not above zero.
    pub async fn add_to_cart(&self, id: ItemId) -> ApiResult<()> {
        let staged = self.staged(id);
        let change = plan_add_to_cart(&self.state(), id, staged)?;
        match change {
            None => {
                log::debug!("add to cart ignored for {}: staged {}", id, staged);
                return Ok(());
            }
            Some(CartChange::Add(item)) => {
                log::info!("adding {} x{} to cart", item.content, item.amount);
                self.api.add_to_cart(&item).await?;
            }
            Some(CartChange::Update { id, amount }) => {
                log::info!("updating cart entry {} to {}", id, amount);
                self.api.update_cart(id, amount).await?;
            }
        }
        self.refresh_cart().await
    }

    pub async fn delete(&self, id: ItemId) -> ApiResult<()> {
        log::info!("deleting cart entry {}", id);
        self.api.delete_from_cart(id).await?;
        self.refresh_cart().await
    }

    pub async fn checkout(&self) -> ApiResult<()> {
        let deleted = self.api.checkout().await?;
        log::info!("checked out {} cart entries", deleted.len());
        self.refresh_cart().await
    }

    /// Replace the cart with the backend's current one
    pub async fn refresh_cart(&self) -> ApiResult<()> {
        let cart = self.api.get_cart().await?;
        self.assign(|state| state.set_cart(cart));
        Ok(())
    }

    /// Every state write redraws the inventory rows, which zeroes their inputs.
    fn assign(&self, write: impl FnOnce(&mut State)) {
        write(&mut self.state.borrow_mut());
        self.staging.borrow_mut().reset();
    }
}
