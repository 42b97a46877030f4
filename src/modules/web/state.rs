use crate::auth::TokenDecoder;
use crate::config::Config;
use crate::database::comments::CommentStore;
use crate::database::connection::Database;
use crate::database::content::ContentStore;
use crate::database::relations::RelationStore;
use crate::engagement::status::StatusResolver;
use crate::engagement::toggle::ToggleEngine;

/// Shared handler state, cloned into every worker
#[derive(Clone)]
pub struct AppState {
    pub contents: ContentStore,
    pub relations: RelationStore,
    pub comments: CommentStore,
    pub toggles: ToggleEngine,
    pub resolver: StatusResolver,
    pub tokens: TokenDecoder,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        let contents = ContentStore::new(db.clone());
        let relations = RelationStore::new(db.clone());
        let tokens = TokenDecoder::new(&config.auth.access_token_secret);

        Self {
            toggles: ToggleEngine::new(relations.clone(), config.engagement.toggle_timeout()),
            resolver: StatusResolver::new(contents.clone(), relations.clone(), tokens.clone()),
            comments: CommentStore::new(db),
            contents,
            relations,
            tokens,
        }
    }
}
