//! # Invoke Bridge
//!
//! Newline-delimited JSON between the storefront frontend and the commands.
//!
//! ## Wire Format
//! ```text
//! stdin  (one request per line)
//!   {"id":1,"cmd":"add_to_cart","args":{"productId":"3f2a...","quantity":2}}
//!
//! stdout (one response per line, same id)
//!   {"id":1,"ok":{"items":[...],"totals":{...},"totalDisplay":"..."}}
//!   {"id":1,"error":{"code":"NOT_FOUND","message":"Product not found"}}
//! ```
//!
//! Requests are handled one at a time, in arrival order. A line that is not
//! a request gets an error response with `"id":null`; the loop keeps going.
//! Logs go to stderr, so stdout carries nothing but responses.
//!
//! ## Commands
//! | cmd                    | args                                  |
//! |------------------------|---------------------------------------|
//! | `list_products`        | `{section?}`                          |
//! | `get_product`          | `{id}`                                |
//! | `get_related_products` | `{id}`                                |
//! | `section_labels`       | none                                  |
//! | `get_cart`             | none                                  |
//! | `add_to_cart`          | `{productId, quantity?}`              |
//! | `update_cart_item`     | `{productId, quantity}`               |
//! | `remove_from_cart`     | `{productId}`                         |
//! | `clear_cart`           | none                                  |
//! | `submit_order`         | `{form: CheckoutForm}`                |
//! | `upload_product`       | `{form: ProductListingForm, image?}`  |
//! | `get_config`           | none                                  |
//! | `get_language`         | none                                  |
//! | `toggle_language`      | none                                  |
//! | `set_language`         | `{language}`                          |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use gharim_core::listing::ProductListingForm;
use gharim_core::order::CheckoutForm;

use crate::commands::{admin, cart, checkout, config, product};
use crate::error::ApiError;
use crate::state::{CartState, ConfigState, DbState, SessionState};

/// One request line.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line. Exactly one of `ok` / `error` is present.
#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    fn new(id: Value, result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response {
                id,
                ok: Some(value),
                error: None,
            },
            Err(err) => Response {
                id,
                ok: None,
                error: Some(err),
            },
        }
    }
}

// =============================================================================
// Command Arguments
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct SectionArgs {
    section: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartArgs {
    product_id: String,
    quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCartItemArgs {
    product_id: String,
    quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductIdArgs {
    product_id: String,
}

#[derive(Debug, Deserialize)]
struct SubmitOrderArgs {
    form: CheckoutForm,
}

#[derive(Debug, Deserialize)]
struct UploadProductArgs {
    form: ProductListingForm,
    image: Option<admin::ImageFile>,
}

#[derive(Debug, Deserialize)]
struct LanguageArgs {
    language: String,
}

// =============================================================================
// Bridge
// =============================================================================

/// Owns the storefront states and routes requests to commands.
#[derive(Debug)]
pub struct Bridge {
    db: DbState,
    cart: CartState,
    config: ConfigState,
    session: SessionState,
}

impl Bridge {
    /// Starts a session: empty cart, configured default language.
    pub fn new(db: DbState, config: ConfigState) -> Self {
        let session = SessionState::new(config.default_language);
        Bridge {
            db,
            cart: CartState::create(),
            config,
            session,
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Closes the catalog. Catalog commands fail afterwards.
    pub async fn close(&self) {
        self.db.inner().close().await;
    }

    /// Runs one command and returns its JSON result.
    pub async fn dispatch(&self, cmd: &str, args: Value) -> Result<Value, ApiError> {
        match cmd {
            "list_products" => {
                let a: SectionArgs = parse_args(args)?;
                reply(product::list_products(&self.db, &self.session, a.section).await?)
            }
            "get_product" => {
                let a: IdArgs = parse_args(args)?;
                reply(product::get_product(&self.db, &self.session, a.id).await?)
            }
            "get_related_products" => {
                let a: IdArgs = parse_args(args)?;
                reply(product::get_related_products(&self.db, &self.session, a.id).await?)
            }
            "section_labels" => reply(product::section_labels(&self.session)),

            "get_cart" => reply(cart::get_cart(&self.cart)),
            "add_to_cart" => {
                let a: AddToCartArgs = parse_args(args)?;
                reply(
                    cart::add_to_cart(&self.db, &self.cart, &self.session, a.product_id, a.quantity)
                        .await?,
                )
            }
            "update_cart_item" => {
                let a: UpdateCartItemArgs = parse_args(args)?;
                reply(cart::update_cart_item(&self.cart, a.product_id, a.quantity)?)
            }
            "remove_from_cart" => {
                let a: ProductIdArgs = parse_args(args)?;
                reply(cart::remove_from_cart(&self.cart, a.product_id))
            }
            "clear_cart" => reply(cart::clear_cart(&self.cart)),

            "submit_order" => {
                let a: SubmitOrderArgs = parse_args(args)?;
                reply(checkout::submit_order(
                    &self.cart,
                    &self.config,
                    &self.session,
                    a.form,
                )?)
            }

            "upload_product" => {
                let a: UploadProductArgs = parse_args(args)?;
                reply(admin::upload_product(&self.db, &self.session, a.form, a.image).await?)
            }

            "get_config" => reply(config::get_config(&self.config)),
            "get_language" => reply(config::get_language(&self.session)),
            "toggle_language" => reply(config::toggle_language(&self.session)),
            "set_language" => {
                let a: LanguageArgs = parse_args(args)?;
                reply(config::set_language(&self.session, a.language)?)
            }

            other => Err(ApiError::bad_request(format!("Unknown command: {}", other))),
        }
    }

    /// Handles one request line and returns the response line.
    pub async fn handle_line(&self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(cmd = %request.cmd, "Request received");
                let result = self.dispatch(&request.cmd, request.args).await;
                if let Err(err) = &result {
                    debug!(cmd = %request.cmd, code = ?err.code, "Command failed");
                }
                Response::new(request.id, result)
            }
            Err(err) => {
                warn!(error = %err, "Malformed request line");
                Response::new(
                    Value::Null,
                    Err(ApiError::bad_request(format!("Malformed request: {}", err))),
                )
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|err| {
            format!(
                r#"{{"id":null,"error":{{"code":"INTERNAL","message":"{}"}}}}"#,
                err.to_string().replace('"', "'")
            )
        })
    }

    /// Reads requests until EOF, writing one response per request.
    ///
    /// The cart session ends with the input.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled: u64 = 0;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line).await;
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
            handled += 1;
        }

        self.cart.dispose();
        info!(requests = handled, "Input closed, session ended");
        Ok(())
    }
}

/// Missing `args` are treated as `{}`.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args
    };
    Ok(serde_json::from_value(args)?)
}

fn reply<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}
