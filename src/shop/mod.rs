//! The transaction engine: the only entry points that move tokens or
//! tiles between owners.

pub mod engine;
pub mod price;

pub use engine::{Shop, ShopError, ShopSnapshot};
pub use price::PriceBasket;
