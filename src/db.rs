use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::AppResult;

/// Page cache per connection, in KiB (negative values are sizes, not pages).
const CACHE_SIZE_KIB: &str = "-16000";

/// Opens the movie store. The pool hands each query its own connection and
/// takes it back when the query finishes, whatever the outcome.
///
/// Every pooled connection gets the read-side pragmas when it is opened;
/// `read_only` adds `query_only` so nothing can write through it.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    read_only: bool,
) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(move |sqlite| {
            let sqlite = sqlite.pragma("cache_size", CACHE_SIZE_KIB);
            if read_only { sqlite.pragma("query_only", "ON") } else { sqlite }
        });

    Ok(Database::connect(opts).await?)
}
