use super::connection::Database;
use super::content::get_item;
use chrono::Utc;
use rusqlite::{params, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment on a content item
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

/// Create comment request
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: String,
    pub author: String,
    pub content: String,
}

/// Comment store
#[derive(Clone)]
pub struct CommentStore {
    db: Database,
}

impl CommentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Adds a comment. Returns `None` if the target item does not exist.
    pub fn add_comment(&self, request: CreateCommentRequest) -> Result<Option<Comment>> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            if get_item(&tx, &request.post_id)?.is_none() {
                return Ok(None);
            }
            tx.execute(
                "INSERT INTO comments (id, post_id, author, content, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![id, request.post_id, request.author, request.content, now],
            )?;
            tx.commit()?;

            Ok(Some(Comment {
                id,
                post_id: request.post_id,
                author: request.author,
                content: request.content,
                created_at: now,
            }))
        })
    }

    /// All comments of one item, newest first
    pub fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, post_id, author, content, created_at
                 FROM comments WHERE post_id = ? ORDER BY created_at DESC, rowid DESC",
            )?;

            let comments = stmt
                .query_map(params![post_id], |row| {
                    Ok(Comment {
                        id: row.get(0)?,
                        post_id: row.get(1)?,
                        author: row.get(2)?,
                        content: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(comments)
        })
    }

    pub fn delete_comment(&self, id: &str) -> Result<bool> {
        let rows = self
            .db
            .with_conn(|conn| conn.execute("DELETE FROM comments WHERE id = ?", params![id]))?;
        Ok(rows > 0)
    }
}
