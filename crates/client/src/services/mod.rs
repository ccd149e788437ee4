//! Stateless wrappers around one backend resource each.
//!
//! Services hold nothing but a clone of the shared [`crate::api::ApiClient`]
//! and translate typed calls into REST requests. No local state, no caching,
//! no retries - propagation is the caller's responsibility.

pub mod cart;
pub mod messages;
pub mod news;
pub mod orders;
pub mod posts;
pub mod premium;

pub use cart::CartService;
pub use messages::MessagesService;
pub use news::NewsService;
pub use orders::OrdersService;
pub use posts::PostsService;
pub use premium::PremiumService;
