//! # Cart
//!
//! The shopper's cart: an insertion-ordered list of line items keyed by
//! product identity.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  add_to_cart(p, 2)   ──► [p×2]                                          │
//! │  add_to_cart(q, 1)   ──► [p×2, q×1]        (appended, order kept)       │
//! │  add_to_cart(p, 3)   ──► [p×5, q×1]        (same id: quantity summed)   │
//! │  update_quantity(q,4)──► [p×5, q×4]                                     │
//! │  update_quantity(p,0)──► [q×4]             (same as remove_from_cart)   │
//! │  clear_cart()        ──► []                                             │
//! │                                                                         │
//! │  cart_total() = Σ unit_price × quantity     (recomputed on every call) │
//! │  cart_count() = Σ quantity                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Product identities are unique within the cart
//! - Every line has 1 ≤ quantity ≤ `MAX_ITEM_QUANTITY`
//! - There is no cached aggregate; totals always come from the lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{pick_localized, Language, Product};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// The product fields are a frozen copy taken when the product was first
/// added. The cart keeps showing the same name and price even if the
/// catalog record changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,

    pub name_en: String,

    pub name_ar: String,

    /// Unit price in whole dinars at time of adding.
    pub unit_price: Money,

    pub image_url: String,

    pub section: String,

    /// Always in `1..=MAX_ITEM_QUANTITY`.
    pub quantity: i64,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name_en: product.name_en.clone(),
            name_ar: product.name_ar.clone(),
            unit_price: product.unit_price(),
            image_url: product.image_url.clone(),
            section: product.section.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Display name with cross-language fallback.
    pub fn name(&self, lang: Language) -> &str {
        pick_localized(&self.name_en, &self.name_ar, lang)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// `Cart` is plain data: the application layer decides where it lives and
/// how long. It serializes cleanly, so a caller that wants the cart to
/// outlive a session can persist it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product, or increases its quantity if it is already present.
    ///
    /// A non-positive quantity, or one that would take the line above
    /// [`MAX_ITEM_QUANTITY`], is rejected and the cart is left unchanged.
    ///
    /// ## Example
    /// ```rust,ignore
    /// cart.add_to_cart(&dates, 2)?;
    /// cart.add_to_cart(&dates, 3)?;
    /// assert_eq!(cart.cart_count(), 5);
    /// ```
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<(), ValidationError> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let merged = item
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_ITEM_QUANTITY)
                .ok_or_else(|| ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: MAX_ITEM_QUANTITY,
                })?;
            item.quantity = merged;
            return Ok(());
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line, exactly like [`Cart::remove_from_cart`]
    /// - `quantity > MAX_ITEM_QUANTITY`: rejected, the line is unchanged
    /// - product not in cart: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<bool, ValidationError> {
        if quantity <= 0 {
            return Ok(self.remove_from_cart(product_id));
        }
        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Removes a line by product id. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Σ unit price × quantity; zero for an empty cart.
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity; zero for an empty cart.
    pub fn cart_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up a line by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Summary for badges and the checkout sidebar.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub item_count: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.cart_count(),
            total: cart.cart_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name_en: format!("Product {}", id),
            name_ar: format!("منتج {}", id),
            description_en: None,
            description_ar: None,
            price,
            image_url: format!("https://img.example/{}.jpg", id),
            section: "gifts".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);

        cart.add_to_cart(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.cart_count(), 2);
        assert_eq!(cart.cart_total(), Money::from_dinars(10_000));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);

        cart.add_to_cart(&product, 2).unwrap();
        cart.add_to_cart(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.get("1").unwrap().quantity, 5);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        let a = test_product("a", 1000);
        let b = test_product("b", 2000);

        cart.add_to_cart(&a, 1).unwrap();
        cart.add_to_cart(&b, 1).unwrap();
        cart.add_to_cart(&a, 4).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_cart_rejects_non_positive_add() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);
        cart.add_to_cart(&product, 1).unwrap();

        assert!(cart.add_to_cart(&product, 0).is_err());
        assert!(cart.add_to_cart(&product, -2).is_err());
        assert_eq!(cart.cart_count(), 1);
    }

    #[test]
    fn test_cart_accepts_add_up_to_max_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);

        cart.add_to_cart(&product, MAX_ITEM_QUANTITY).unwrap();
        assert_eq!(cart.cart_count(), MAX_ITEM_QUANTITY);

        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_to_cart(&product, MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_rejects_merge_past_max_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);
        cart.add_to_cart(&product, 600).unwrap();

        assert!(matches!(
            cart.add_to_cart(&product, 400),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(cart.get("1").unwrap().quantity, 600);

        cart.add_to_cart(&product, MAX_ITEM_QUANTITY - 600).unwrap();
        assert_eq!(cart.get("1").unwrap().quantity, MAX_ITEM_QUANTITY);
        assert!(cart.add_to_cart(&product, 1).is_err());
    }

    #[test]
    fn test_cart_huge_quantities_do_not_overflow() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000);

        assert!(cart.add_to_cart(&product, i64::MAX).is_err());
        cart.add_to_cart(&product, 1).unwrap();
        assert!(cart.add_to_cart(&product, i64::MAX).is_err());
        assert!(cart.update_quantity("1", 2_000_000_000_000_000_000).is_err());

        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.cart_total(), Money::from_dinars(5000));
    }

    #[test]
    fn test_cart_total_sums_lines() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product("1", 5000), 2).unwrap();
        cart.add_to_cart(&test_product("2", 1250), 3).unwrap();

        assert_eq!(cart.cart_total(), Money::from_dinars(13_750));
        assert_eq!(cart.cart_count(), 5);

        let totals = cart.totals();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.item_count, 5);
        assert_eq!(totals.total, Money::from_dinars(13_750));
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let mut updated = Cart::new();
        updated.add_to_cart(&test_product("1", 5000), 2).unwrap();
        updated.add_to_cart(&test_product("2", 700), 1).unwrap();
        let mut removed = updated.clone();

        assert!(updated.update_quantity("1", 0).unwrap());
        assert!(removed.remove_from_cart("1"));

        assert_eq!(updated.items(), removed.items());
        assert_eq!(updated.cart_total(), Money::from_dinars(700));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product("1", 5000), 2).unwrap();

        assert!(cart.update_quantity("1", 7).unwrap());
        assert_eq!(cart.cart_count(), 7);
        assert!(!cart.update_quantity("1", 7).unwrap());
        assert!(!cart.update_quantity("missing", 3).unwrap());
        assert_eq!(cart.line_count(), 1);

        assert!(cart.update_quantity("1", MAX_ITEM_QUANTITY).unwrap());
        assert!(matches!(
            cart.update_quantity("1", MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(cart.cart_count(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product("1", 5000), 1).unwrap();

        assert!(!cart.remove_from_cart("nope"));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product("1", 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_total(), Money::zero());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_item_name_fallback() {
        let mut product = test_product("1", 100);
        product.name_ar = String::new();
        let item = CartItem::from_product(&product, 1);

        assert_eq!(item.name(Language::Ar), "Product 1");
    }

    #[test]
    fn test_cart_serde_round_trip_keeps_lines() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product("1", 5000), 2).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.items(), cart.items());
    }
}
