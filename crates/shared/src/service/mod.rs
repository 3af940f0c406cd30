mod auth;
mod cart;
mod category;
mod product;
mod search;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::cart::CartService;
pub use self::category::CategoryService;
pub use self::product::ProductService;
pub use self::search::SearchService;
pub use self::user::UserService;
