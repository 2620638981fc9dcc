//! SQLite connection pooling.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

/// Shared r2d2 pool over SQLite connections.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A single pooled connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a connection pool for the given SQLite database path or URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
