use rusqlite::{Connection, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to the content database.
///
/// All stores go through one connection guarded by a mutex, so a closure run
/// under `with_conn` never interleaves with another store operation.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        log::info!("Opened content database at {}", db_path);
        Self::bootstrap(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        create_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        // A poisoned lock means a panic mid-operation; the open transaction was rolled back on drop.
        self.conn.lock().map_err(|_| {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_MISUSE),
                Some("database connection lock poisoned".to_string()),
            )
        })
    }
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS content_items (
            id TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            author TEXT NOT NULL,
            like_count INTEGER NOT NULL DEFAULT 0 CHECK (like_count >= 0),
            bookmark_count INTEGER NOT NULL DEFAULT 0 CHECK (bookmark_count >= 0),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_content_kind ON content_items(kind, created_at)",
        [],
    )?;

    // One table per relation kind; the composite key backs the one-edge-per-pair rule
    for table in ["likes", "bookmarks"] {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    user_id TEXT NOT NULL,
                    post_id TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    PRIMARY KEY (user_id, post_id)
                )"
            ),
            [],
        )?;
        conn.execute(
            &format!("CREATE INDEX IF NOT EXISTS idx_{table}_post ON {table}(post_id)"),
            [],
        )?;
    }

    conn.execute(
        "CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            post_id TEXT NOT NULL,
            author TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id)",
        [],
    )?;

    Ok(())
}
