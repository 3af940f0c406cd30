mod api;
mod cart;
mod category;
mod product;
mod search;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::cart::CartResponse;
pub use self::category::CategoryResponse;
pub use self::product::ProductResponse;
pub use self::search::SearchResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
