mod database;
mod hashing;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, run_migrations};
pub use self::hashing::Hashing;
pub use self::myconfig::Config;
