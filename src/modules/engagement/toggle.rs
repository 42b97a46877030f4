use crate::database::content::ContentItem;
use crate::database::relations::{CommitGate, RelationKey, RelationKind, RelationStore, ToggleApply};
use crate::error::{AppError, AppResult};
use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

/// Toggle Engine: flips like/bookmark edges and keeps item counters in step.
#[derive(Clone)]
pub struct ToggleEngine {
    relations: RelationStore,
    timeout: Duration,
}

impl ToggleEngine {
    pub fn new(relations: RelationStore, timeout: Duration) -> Self {
        Self { relations, timeout }
    }

    /// Flips the `(user_id, post_id, kind)` edge and returns the updated item.
    ///
    /// The edge change and the counter change commit together or not at all.
    /// A timeout is reported as a retryable [`AppError::Timeout`] and means
    /// nothing was written: a transaction still queued or running when the
    /// bound expires rolls back instead of committing.
    pub async fn toggle(&self, kind: RelationKind, user_id: &str, post_id: &str) -> AppResult<ContentItem> {
        if user_id.trim().is_empty() || post_id.trim().is_empty() {
            return Err(AppError::validation("user_id and post_id are required"));
        }

        let key = RelationKey::new(kind, user_id, post_id);
        let relations = self.relations.clone();
        let gate = Arc::new(CommitGate::default());
        let task_gate = Arc::clone(&gate);
        let mut task = Box::pin(web::block(move || relations.apply_toggle(&key, &task_gate)));

        let applied = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => joined??,
            // Commit already claimed, wait for it
            Err(_) if !gate.abandon() => task.await??,
            Err(_) => ToggleApply::Abandoned,
        };

        let outcome = match applied {
            ToggleApply::Applied(outcome) => outcome,
            ToggleApply::MissingItem => {
                return Err(AppError::not_found(format!("content item {}", post_id)));
            }
            ToggleApply::Abandoned => {
                log::warn!("Toggle {:?} by {} on {} timed out", kind, user_id, post_id);
                return Err(AppError::Timeout(self.timeout.as_millis() as u64));
            }
        };

        log::info!(
            "{:?} {} by {} on {} (count {})",
            kind,
            if outcome.active { "added" } else { "removed" },
            user_id,
            post_id,
            outcome.count
        );
        Ok(outcome.item)
    }
}
