use super::connection::Database;
use chrono::Utc;
use regex::{Regex, RegexBuilder};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Result, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(crate) const ITEM_COLUMNS: &str =
    "c.id, c.kind, c.title, c.body, c.author, c.like_count, c.bookmark_count, c.created_at, c.updated_at";

/// Content collections served by the site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Magazine,
    Recipe,
    Review,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Post,
        ContentKind::Magazine,
        ContentKind::Recipe,
        ContentKind::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Magazine => "magazine",
            ContentKind::Recipe => "recipe",
            ContentKind::Review => "review",
        }
    }

    /// URL collection segment, e.g. `recipes`.
    pub fn collection(&self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Magazine => "magazines",
            ContentKind::Recipe => "recipes",
            ContentKind::Review => "reviews",
        }
    }

    pub fn from_collection(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.collection() == segment)
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl ToSql for ContentKind {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ContentKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        ContentKind::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown content kind '{}'", text).into()))
    }
}

/// A stored post, magazine article, recipe or review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub author: String,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Create request body
#[derive(Debug, Clone, Deserialize)]
pub struct NewContent {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Update request body; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.author.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
    MostLiked,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "latest" => Some(SortOrder::Latest),
            "oldest" => Some(SortOrder::Oldest),
            "likes" => Some(SortOrder::MostLiked),
            _ => None,
        }
    }

    fn order_by(&self) -> &'static str {
        match self {
            SortOrder::Latest => "c.created_at DESC, c.rowid DESC",
            SortOrder::Oldest => "c.created_at ASC, c.rowid ASC",
            SortOrder::MostLiked => "c.like_count DESC, c.created_at DESC, c.rowid DESC",
        }
    }
}

/// List/search options
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    pub search: Option<Regex>,
    pub limit: Option<usize>,
    pub sort: SortOrder,
}

/// Case-insensitive literal substring matcher for a user search term.
pub fn search_pattern(term: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .size_limit(1 << 20)
        .build()
}

impl ContentItem {
    fn matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.title) || pattern.is_match(&self.body) || pattern.is_match(&self.author)
    }
}

pub(crate) fn row_to_item(row: &Row<'_>) -> Result<ContentItem> {
    Ok(ContentItem {
        id: row.get(0)?,
        kind: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        author: row.get(4)?,
        like_count: row.get(5)?,
        bookmark_count: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

pub(crate) fn get_item(conn: &rusqlite::Connection, id: &str) -> Result<Option<ContentItem>> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM content_items c WHERE c.id = ?"),
        params![id],
        row_to_item,
    )
    .optional()
}

/// Content Store: posts, magazines, recipes and reviews
#[derive(Clone)]
pub struct ContentStore {
    db: Database,
}

impl ContentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn create(&self, kind: ContentKind, request: NewContent) -> Result<ContentItem> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO content_items (id, kind, title, body, author, like_count, bookmark_count, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, 0, 0, ?, ?)",
                params![id, kind, request.title, request.body, request.author, now, now],
            )?;
            Ok(())
        })?;
        log::debug!("Created {} {}", kind.as_str(), id);

        Ok(ContentItem {
            id,
            kind,
            title: request.title,
            body: request.body,
            author: request.author,
            like_count: 0,
            bookmark_count: 0,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<ContentItem>> {
        self.db.with_conn(|conn| get_item(conn, id))
    }

    /// Lists one collection, newest first unless `query.sort` says otherwise.
    pub fn find(&self, kind: ContentKind, query: &ContentQuery) -> Result<Vec<ContentItem>> {
        // Search filters in Rust, so the limit can only go to SQL without one
        let sql_limit = match (&query.search, query.limit) {
            (None, Some(limit)) => i64::try_from(limit).unwrap_or(i64::MAX),
            _ => -1,
        };
        let items = self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM content_items c WHERE c.kind = ? ORDER BY {} LIMIT ?",
                query.sort.order_by()
            ))?;
            let items = stmt
                .query_map(params![kind, sql_limit], row_to_item)?
                .collect::<Result<Vec<_>>>()?;
            Ok(items)
        })?;

        let filtered = items
            .into_iter()
            .filter(|item| query.search.as_ref().map_or(true, |pattern| item.matches(pattern)))
            .take(query.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(filtered)
    }

    /// Applies a partial update. Returns `None` if the item does not exist.
    pub fn update(&self, id: &str, patch: ContentPatch) -> Result<Option<ContentItem>> {
        let now = Utc::now().to_rfc3339();
        self.db.with_conn(|conn| {
            let rows = conn.execute(
                "UPDATE content_items
                 SET title = COALESCE(?, title),
                     body = COALESCE(?, body),
                     author = COALESCE(?, author),
                     updated_at = ?
                 WHERE id = ?",
                params![patch.title, patch.body, patch.author, now, id],
            )?;
            if rows == 0 {
                return Ok(None);
            }
            get_item(conn, id)
        })
    }

    /// Deletes an item together with its like/bookmark edges and comments.
    pub fn delete(&self, id: &str) -> Result<Option<ContentItem>> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            let deleted = delete_cascade(&tx, id)?;
            tx.commit()?;
            Ok(deleted)
        })
    }

    /// Deletes every listed item that exists, in one transaction.
    pub fn delete_many(&self, ids: &[String]) -> Result<Vec<ContentItem>> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut deleted = Vec::with_capacity(ids.len());
            for id in ids {
                if let Some(item) = delete_cascade(&tx, id)? {
                    deleted.push(item);
                }
            }
            tx.commit()?;
            Ok(deleted)
        })
    }
}

fn delete_cascade(conn: &rusqlite::Connection, id: &str) -> Result<Option<ContentItem>> {
    let Some(item) = get_item(conn, id)? else {
        return Ok(None);
    };

    let likes = conn.execute("DELETE FROM likes WHERE post_id = ?", params![id])?;
    let bookmarks = conn.execute("DELETE FROM bookmarks WHERE post_id = ?", params![id])?;
    let comments = conn.execute("DELETE FROM comments WHERE post_id = ?", params![id])?;
    conn.execute("DELETE FROM content_items WHERE id = ?", params![id])?;

    log::debug!(
        "Deleted {} {} ({} likes, {} bookmarks, {} comments)",
        item.kind.as_str(),
        id,
        likes,
        bookmarks,
        comments
    );
    Ok(Some(item))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn new_content(title: &str, body: &str, author: &str) -> NewContent {
        NewContent {
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
        }
    }
}
