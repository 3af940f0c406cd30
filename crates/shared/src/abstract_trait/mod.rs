mod auth;
mod cart;
mod category;
mod hashing;
mod product;
mod search;
mod token;
mod update;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::*;
pub use self::category::*;
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::product::*;
pub use self::search::{
    DynSearchRepository, DynSearchService, SearchRepositoryTrait, SearchServiceTrait,
};
pub use self::token::{DynTokenRepository, TokenRepositoryTrait};
pub use self::update::{UnversionedUpdate, VersionedUpdate};
pub use self::user::*;
