//! Domain model for the bestseller catalog and per-user carts.

pub mod entities;
pub mod normalize;
pub mod repositories;

pub use entities::{CartEntry, CartLine, Goods, NewGoods, NewUser, RawListing, User};
pub use normalize::{PriceParseError, normalize_listing};
pub use repositories::{CartRepository, GoodsRepository, StoreError, UserRepository};
