mod cart;
mod category;
mod constraint;
mod fragment;
mod product;
mod search;
mod token;
mod user;

pub use self::cart::CartRepository;
pub use self::category::CategoryRepository;
pub use self::constraint::{constraint_error, translate, translate_versioned};
pub use self::fragment::{
    FilterValue, Fragment, SelectQuery, SortColumn, equality_fragment, pagination_fragment,
    sort_fragment,
};
pub use self::product::ProductRepository;
pub use self::search::{SearchRepository, SearchTable};
pub use self::token::TokenRepository;
pub use self::user::UserRepository;
