//! # Cart Commands
//!
//! Cart manipulation for the product pages and the cart view.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cart Lifecycle                                 │
//! │                                                                         │
//! │   ┌──────────┐  add_to_cart   ┌──────────┐  submit_order  ┌──────────┐ │
//! │   │  Empty   │ ─────────────► │  Items   │ ─────────────► │  Empty   │ │
//! │   │          │                │          │   (cleared)    │          │ │
//! │   └──────────┘                └──────────┘                └──────────┘ │
//! │        ▲                        │     ▲                                 │
//! │        │       clear_cart       │     │ update_cart_item                │
//! │        └────────────────────────┘     │ remove_from_cart                │
//! │                                       └─────────────                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use gharim_core::money::format_currency;
use gharim_core::{Cart, CartItem, CartTotals};

use crate::commands::product::find_product;
use crate::error::ApiError;
use crate::state::{CartState, DbState, SessionState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// Total formatted for display.
    pub total_display: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        CartResponse {
            items: cart.items().to_vec(),
            total_display: format_currency(totals.total),
            totals,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases, position is kept
/// - If product not in cart: appended as a new line
/// - Name, price and image are copied from the catalog at this moment
///
/// ## Arguments
/// * `product_id` - Catalog identity to add
/// * `quantity` - Quantity to add (default: 1, must be positive)
pub async fn add_to_cart(
    db: &DbState,
    cart: &CartState,
    session: &SessionState,
    product_id: String,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = find_product(db, &product_id, session.language()).await?;

    cart.with_cart_mut(|c| {
        c.add_to_cart(&product, quantity)?;
        Ok::<CartResponse, ApiError>(CartResponse::from(&*c))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Quantity above `MAX_ITEM_QUANTITY`: rejected, cart unchanged
/// - Product not in cart: nothing changes
pub fn update_cart_item(
    cart: &CartState,
    product_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.update_quantity(&product_id, quantity)? {
            debug!(product_id = %product_id, "update_cart_item: unchanged");
        }
        Ok::<CartResponse, ApiError>(CartResponse::from(&*c))
    })
}

/// Removes a line from the cart. Removing an absent product is a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: String) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_from_cart(&product_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear_cart();
        CartResponse::from(&*c)
    })
}
