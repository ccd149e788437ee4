//! Partsmarket client SDK.
//!
//! A typed client for the partsmarket marketplace REST API: products,
//! reviews, cart, user sessions, messaging, community posts, orders, news
//! and premium accounts.
//!
//! # Architecture
//!
//! - [`api::ApiClient`] wraps one shared `reqwest::Client`; it attaches the
//!   session's bearer token to every outgoing request and otherwise passes
//!   responses through untouched.
//! - Stores ([`stores`]) are reactive state containers with async actions:
//!   session lifecycle, product cache, cart, user cache, theme. Each is
//!   constructed once per application session and injected into consumers -
//!   there are no global singletons.
//! - Services ([`services`]) are stateless wrappers around one backend
//!   resource each (cart, posts, premium, messages, news, orders).
//! - [`storage`] provides the durable key-value store that holds the session
//!   token, the serialized user profile and the theme across restarts.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use partsmarket_client::{App, ClientConfig};
//! use partsmarket_client::storage::FileStorage;
//! use partsmarket_client::ui::NoopUi;
//!
//! let config = ClientConfig::from_env()?;
//! let storage = Arc::new(FileStorage::open("partsmarket.json"));
//! let app = App::new(config, storage, Arc::new(NoopUi));
//!
//! let product = app.products().fetch_product_by_id(42.into()).await;
//! app.cart().add_to_cart(42.into(), 1).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod storage;
pub mod stores;
pub mod ui;

pub use app::App;
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, Result};
