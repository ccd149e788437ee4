//! Partsmarket Core - Shared domain types.
//!
//! This crate provides the wire and domain types used by the partsmarket
//! client SDK. It contains only types - no I/O, no HTTP clients - which
//! keeps it lightweight and usable anywhere.
//!
//! All wire types deserialize from the backend's camelCase JSON.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs and entity types (products, reviews, cart, users,
//!   orders, posts, messages, news, premium accounts)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
