use crate::auth::{bearer_token, TokenDecoder};
use crate::database::content::{ContentItem, ContentKind, ContentStore};
use crate::database::relations::{RelationKey, RelationKind, RelationStore};
use crate::error::{AppError, AppResult};
use actix_web::web;
use serde::Serialize;

/// Read-only projection of a stored item plus the caller's relation flags.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentView {
    #[serde(flatten)]
    pub item: ContentItem,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

impl ContentView {
    pub fn anonymous(item: ContentItem) -> Self {
        Self {
            item,
            is_liked: false,
            is_bookmarked: false,
        }
    }
}

/// Status Resolver: joins like/bookmark existence onto a content item.
#[derive(Clone)]
pub struct StatusResolver {
    contents: ContentStore,
    relations: RelationStore,
    decoder: TokenDecoder,
}

impl StatusResolver {
    pub fn new(contents: ContentStore, relations: RelationStore, decoder: TokenDecoder) -> Self {
        Self {
            contents,
            relations,
            decoder,
        }
    }

    /// Looks up `post_id` within `kind`, then reads the caller's flags.
    ///
    /// `authorization` is the raw header. It is only inspected once the item is
    /// known to exist, so an unknown item is NotFound whatever the header says.
    /// Without a header the flags are false; a header or token that fails to
    /// verify is rejected.
    pub async fn resolve_status(
        &self,
        kind: ContentKind,
        post_id: &str,
        authorization: Option<&str>,
    ) -> AppResult<ContentView> {
        let contents = self.contents.clone();
        let id = post_id.to_string();
        let item = web::block(move || contents.find_by_id(&id))
            .await??
            .filter(|item| item.kind == kind)
            .ok_or_else(|| AppError::not_found(format!("{} {}", kind.as_str(), post_id)))?;

        let Some(token) = bearer_token(authorization)? else {
            return Ok(ContentView::anonymous(item));
        };
        let caller = self.decoder.decode(token)?;

        let relations = self.relations.clone();
        let id = post_id.to_string();
        let (is_liked, is_bookmarked) = web::block(move || {
            let liked = relations.exists(&RelationKey::new(RelationKind::Like, caller.user_id.as_str(), id.as_str()))?;
            let bookmarked =
                relations.exists(&RelationKey::new(RelationKind::Bookmark, caller.user_id.as_str(), id.as_str()))?;
            Ok::<_, rusqlite::Error>((liked, bookmarked))
        })
        .await??;

        Ok(ContentView {
            item,
            is_liked,
            is_bookmarked,
        })
    }
}
