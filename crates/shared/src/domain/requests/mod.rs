mod auth;
mod cart;
mod category;
mod product;
mod search;
mod user;

pub use self::auth::LoginRequest;
pub use self::cart::{CartSort, CreateCartRequest, FindAllCarts, UpdateCartRequest};
pub use self::category::{
    CategorySort, CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest,
};
pub use self::product::{CreateProductRequest, FindAllProducts, ProductSort, UpdateProductRequest};
pub use self::search::SearchQuery;
pub use self::user::{CreateUserRequest, FindAllUsers, UpdateUserRequest, UserPatch, UserSort};

/// Partial update bodies that carry the version the client last read.
pub trait Versioned {
    fn expected_version(&self) -> i32;
}
