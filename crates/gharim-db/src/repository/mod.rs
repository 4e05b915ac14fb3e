//! # Repository Module
//!
//! Database repositories for the Gharim Store catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront Command                                                     │
//! │       │                                                                 │
//! │       │  db.products().list(Some("coffee"))                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── list(&self, section)                                               │
//! │  ├── get_by_id(&self, id) / require(&self, id)                          │
//! │  ├── related(&self, product, limit)                                     │
//! │  ├── insert(&self, product)                                             │
//! │  └── count(&self)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (products table)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never write SQL; everything goes through a repository handed out
//! by [`Database`](crate::Database).

pub mod product;
