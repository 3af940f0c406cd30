mod cart;
mod category;
mod product;
mod search;
mod token;
mod user;

pub use self::cart::Cart;
pub use self::category::Category;
pub use self::product::Product;
pub use self::search::SearchResult;
pub use self::token::Token;
pub use self::user::User;
