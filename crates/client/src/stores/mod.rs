//! Reactive state containers.
//!
//! Each store owns one slice of application state and exposes async actions
//! that synchronize it with the backend. Stores are constructed once per
//! application session by [`crate::App`] and injected into consumers.
//!
//! - [`auth`] - session token and logged-in profile
//! - [`products`] - product cache with lazy reviews and publishing
//! - [`cart`] - cart line items with derived totals
//! - [`users`] - read-only cache of other users' profiles
//! - [`theme`] - persisted light/dark preference

pub mod auth;
pub mod cart;
pub mod products;
pub mod theme;
pub mod users;

pub use auth::AuthStore;
pub use cart::CartStore;
pub use products::ProductStore;
pub use theme::{Theme, ThemeStore};
pub use users::UserStore;
