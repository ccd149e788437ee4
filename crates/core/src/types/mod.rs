//! Domain types for the partsmarket marketplace.

pub mod cart;
pub mod id;
pub mod message;
pub mod news;
pub mod order;
pub mod post;
pub mod premium;
pub mod product;
pub mod user;

pub use cart::{CartItem, CartProduct, CartSnapshot};
pub use id::*;
pub use message::{Conversation, Message};
pub use news::{NewsArticle, NewsSource};
pub use order::{Order, OrderItem};
pub use post::{Comment, NewComment, NewPost, Post};
pub use premium::{PremiumDetails, PremiumStatus};
pub use product::{ImageUpload, NewProduct, NewReview, Product, Review};
pub use user::{Credentials, ProfilePatch, UserProfile};
