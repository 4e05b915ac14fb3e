//! # Cart State
//!
//! The shopper's cart for the current browsing session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Commands are async and may run on any runtime worker
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shopper Action           Command                 Cart Change           │
//! │  ──────────────           ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► add / qty += n        │
//! │                                                                         │
//! │  + / - on a line ────────► update_cart_item() ──► qty = n (0 removes)   │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► line removed          │
//! │                                                                         │
//! │  Order sent ─────────────► submit_order() ──────► cleared               │
//! │                                                                         │
//! │  Every write publishes the new CartTotals on a watch channel so the    │
//! │  header badge can follow the item count without polling.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart lives from [`CartState::create`] to [`CartState::dispose`];
//! nothing is written to disk.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use gharim_core::{Cart, CartTotals};

/// Session-scoped cart store.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: the bridge and any subscriber share the same cart
/// - `Mutex`: only one command modifies the cart at a time
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    totals: Arc<watch::Sender<CartTotals>>,
}

impl CartState {
    /// Starts a session with an empty cart.
    pub fn create() -> Self {
        let (totals, _) = watch::channel(CartTotals::default());
        debug!("Cart session created");

        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            totals: Arc::new(totals),
        }
    }

    /// Ends the session: the cart is emptied and subscribers see zero totals.
    pub fn dispose(&self) {
        self.with_cart_mut(|cart| cart.clear_cart());
        debug!("Cart session disposed");
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart, then publishes
    /// the resulting totals.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_to_cart(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        let result = f(&mut cart);
        self.totals.send_replace(cart.totals());
        result
    }

    /// Current totals without taking the cart lock.
    pub fn totals(&self) -> CartTotals {
        *self.totals.borrow()
    }

    /// Receiver that yields the totals after every cart change.
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.totals.subscribe()
    }

    // A panic inside a cart closure cannot leave the cart half-updated:
    // every Cart method completes its change before returning.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gharim_core::{Money, Product};

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name_en: format!("Product {}", id),
            name_ar: format!("منتج {}", id),
            description_en: None,
            description_ar: None,
            price,
            image_url: format!("https://img.example/{}.jpg", id),
            section: "sweets".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let state = CartState::create();
        assert!(state.with_cart(|c| c.is_empty()));
        assert_eq!(state.totals(), CartTotals::default());
    }

    #[test]
    fn test_writes_publish_totals() {
        let state = CartState::create();
        let rx = state.subscribe();

        state
            .with_cart_mut(|c| c.add_to_cart(&product("p1", 5000), 2))
            .unwrap();

        let totals = *rx.borrow();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total, Money::from_dinars(10_000));
        assert_eq!(state.totals(), totals);
    }

    #[tokio::test]
    async fn test_subscriber_is_notified() {
        let state = CartState::create();
        let mut rx = state.subscribe();

        state
            .with_cart_mut(|c| c.add_to_cart(&product("p1", 1500), 1))
            .unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().item_count, 1);
    }

    #[test]
    fn test_dispose_clears_cart() {
        let state = CartState::create();
        state
            .with_cart_mut(|c| c.add_to_cart(&product("p1", 5000), 3))
            .unwrap();

        state.dispose();

        assert!(state.with_cart(|c| c.is_empty()));
        assert_eq!(state.totals().item_count, 0);
    }

    #[test]
    fn test_clones_share_the_cart() {
        let state = CartState::create();
        let other = state.clone();

        other
            .with_cart_mut(|c| c.add_to_cart(&product("p1", 5000), 1))
            .unwrap();

        assert_eq!(state.with_cart(|c| c.cart_count()), 1);
    }
}
