mod repository;
mod service;

pub use self::repository::{
    CartCommandRepositoryTrait, CartQueryRepositoryTrait, DynCartCommandRepository,
    DynCartQueryRepository,
};
pub use self::service::{CartServiceTrait, DynCartService};
