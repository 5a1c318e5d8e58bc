mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, PoolSettings};
pub use self::myconfig::Config;
