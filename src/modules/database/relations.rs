use super::connection::Database;
use super::content::{get_item, row_to_item, ContentItem, ITEM_COLUMNS};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result, TransactionBehavior};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

/// Kind of user → content edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Like,
    Bookmark,
}

impl RelationKind {
    fn table(&self) -> &'static str {
        match self {
            RelationKind::Like => "likes",
            RelationKind::Bookmark => "bookmarks",
        }
    }

    /// Denormalized counter kept on `content_items`.
    fn counter_column(&self) -> &'static str {
        match self {
            RelationKind::Like => "like_count",
            RelationKind::Bookmark => "bookmark_count",
        }
    }
}

/// Relation edge as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationEdge {
    pub user_id: String,
    pub post_id: String,
    pub kind: RelationKind,
    pub created_at: String,
}

/// Identifies one edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationKey {
    pub kind: RelationKind,
    pub user_id: String,
    pub post_id: String,
}

impl RelationKey {
    pub fn new(kind: RelationKind, user_id: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self {
            kind,
            user_id: user_id.into(),
            post_id: post_id.into(),
        }
    }
}

/// Result of one toggle: edge state and counter after the change
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub active: bool,
    pub count: i64,
    pub item: ContentItem,
}

/// What `apply_toggle` did
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleApply {
    Applied(ToggleOutcome),
    /// The content item does not exist; nothing was written.
    MissingItem,
    /// The caller gave up before the commit; the transaction was rolled back.
    Abandoned,
}

const GATE_PENDING: u8 = 0;
const GATE_COMMITTING: u8 = 1;
const GATE_ABANDONED: u8 = 2;

/// Hand-off between a toggle transaction and the caller waiting on it.
///
/// Exactly one side wins: either the transaction claims the commit, or the
/// caller abandons it first and the transaction rolls back.
#[derive(Debug, Default)]
pub struct CommitGate(AtomicU8);

impl CommitGate {
    /// Claims the right to commit. False if the caller already gave up.
    pub fn try_commit(&self) -> bool {
        self.0
            .compare_exchange(GATE_PENDING, GATE_COMMITTING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Withdraws the caller. False if the commit has already been claimed.
    pub fn abandon(&self) -> bool {
        self.0
            .compare_exchange(GATE_PENDING, GATE_ABANDONED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_abandoned(&self) -> bool {
        self.0.load(Ordering::Acquire) == GATE_ABANDONED
    }
}

/// Relation Store: like and bookmark edges
#[derive(Clone)]
pub struct RelationStore {
    db: Database,
}

impl RelationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_one(&self, key: &RelationKey) -> Result<Option<RelationEdge>> {
        self.db.with_conn(|conn| find_edge(conn, key))
    }

    pub fn exists(&self, key: &RelationKey) -> Result<bool> {
        Ok(self.find_one(key)?.is_some())
    }

    /// Inserts an edge without touching counters. True if it was new.
    #[cfg(test)]
    pub fn create(&self, key: &RelationKey) -> Result<bool> {
        self.db.with_conn(|conn| {
            let inserted = conn.execute(
                &format!(
                    "INSERT OR IGNORE INTO {} (user_id, post_id, created_at) VALUES (?, ?, ?)",
                    key.kind.table()
                ),
                params![key.user_id, key.post_id, Utc::now().to_rfc3339()],
            )?;
            Ok(inserted > 0)
        })
    }

    /// Deletes an edge without touching counters. True if one existed.
    #[cfg(test)]
    pub fn remove(&self, key: &RelationKey) -> Result<bool> {
        self.db.with_conn(|conn| {
            let removed = conn.execute(
                &format!("DELETE FROM {} WHERE user_id = ? AND post_id = ?", key.kind.table()),
                params![key.user_id, key.post_id],
            )?;
            Ok(removed > 0)
        })
    }

    /// `apply_toggle` with a gate nobody abandons.
    #[cfg(test)]
    pub fn toggle_now(&self, key: &RelationKey) -> Result<Option<ToggleOutcome>> {
        match self.apply_toggle(key, &CommitGate::default())? {
            ToggleApply::Applied(outcome) => Ok(Some(outcome)),
            _ => Ok(None),
        }
    }

    /// Flips the edge and adjusts the matching counter in one transaction.
    ///
    /// This is the only way edges change, so counters always match edge counts.
    /// Nothing is written when the item is missing or `gate` was abandoned.
    pub fn apply_toggle(&self, key: &RelationKey, gate: &CommitGate) -> Result<ToggleApply> {
        self.db.with_conn(|conn| {
            if gate.is_abandoned() {
                return Ok(ToggleApply::Abandoned);
            }

            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            if get_item(&tx, &key.post_id)?.is_none() {
                return Ok(ToggleApply::MissingItem);
            }

            let table = key.kind.table();
            let counter = key.kind.counter_column();

            let removed = tx.execute(
                &format!("DELETE FROM {table} WHERE user_id = ? AND post_id = ?"),
                params![key.user_id, key.post_id],
            )?;
            let active = if removed > 0 {
                tx.execute(
                    &format!("UPDATE content_items SET {counter} = {counter} - 1 WHERE id = ? AND {counter} > 0"),
                    params![key.post_id],
                )?;
                false
            } else {
                tx.execute(
                    &format!("INSERT INTO {table} (user_id, post_id, created_at) VALUES (?, ?, ?)"),
                    params![key.user_id, key.post_id, Utc::now().to_rfc3339()],
                )?;
                tx.execute(
                    &format!("UPDATE content_items SET {counter} = {counter} + 1 WHERE id = ?"),
                    params![key.post_id],
                )?;
                true
            };

            let item = get_item(&tx, &key.post_id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;

            // Dropping `tx` rolls back
            if !gate.try_commit() {
                return Ok(ToggleApply::Abandoned);
            }
            tx.commit()?;

            let count = match key.kind {
                RelationKind::Like => item.like_count,
                RelationKind::Bookmark => item.bookmark_count,
            };
            Ok(ToggleApply::Applied(ToggleOutcome { active, count, item }))
        })
    }

    /// Items a user has liked or bookmarked, most recent edge first.
    pub fn list_for_user(&self, kind: RelationKind, user_id: &str) -> Result<Vec<ContentItem>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM {table} r
                 JOIN content_items c ON c.id = r.post_id
                 WHERE r.user_id = ?
                 ORDER BY r.created_at DESC, r.rowid DESC",
                table = kind.table()
            ))?;
            let items = stmt
                .query_map(params![user_id], row_to_item)?
                .collect::<Result<Vec<_>>>()?;
            Ok(items)
        })
    }

    #[cfg(test)]
    pub fn count_for_post(&self, kind: RelationKind, post_id: &str) -> Result<i64> {
        self.db.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT COUNT(*) FROM {} WHERE post_id = ?", kind.table()),
                params![post_id],
                |row| row.get(0),
            )
        })
    }
}

fn find_edge(conn: &Connection, key: &RelationKey) -> Result<Option<RelationEdge>> {
    conn.query_row(
        &format!(
            "SELECT user_id, post_id, created_at FROM {} WHERE user_id = ? AND post_id = ?",
            key.kind.table()
        ),
        params![key.user_id, key.post_id],
        |row| {
            Ok(RelationEdge {
                user_id: row.get(0)?,
                post_id: row.get(1)?,
                kind: key.kind,
                created_at: row.get(2)?,
            })
        },
    )
    .optional()
}
