use crate::auth::{self, CallerIdentity};
use crate::comments::CreateCommentRequest;
use crate::content::{search_pattern, ContentKind, ContentPatch, ContentQuery, NewContent, SortOrder};
use crate::error::{AppError, AppResult};
use crate::relations::RelationKind;
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

/// List/search query string
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// Bulk delete body
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

/// Like/bookmark toggle body
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub post_id: String,
    pub user_id: Option<String>,
}

fn authorization(req: &HttpRequest) -> AppResult<Option<&str>> {
    match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| AppError::authentication("Authorization header is not valid text")),
        None => Ok(None),
    }
}

fn bearer(req: &HttpRequest) -> AppResult<Option<&str>> {
    auth::bearer_token(authorization(req)?)
}

fn collection_kind(segment: &str) -> AppResult<ContentKind> {
    ContentKind::from_collection(segment).ok_or_else(|| AppError::not_found(format!("collection '{}'", segment)))
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", field)));
    }
    Ok(())
}

impl ListParams {
    fn into_query(self) -> AppResult<ContentQuery> {
        let search = match self.q.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => Some(
                search_pattern(term).map_err(|e| AppError::validation(format!("invalid search term: {}", e)))?,
            ),
            _ => None,
        };
        let limit = match self.limit.as_deref() {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|_| AppError::validation(format!("limit must be a non-negative integer, got '{}'", raw)))?,
            ),
            None => None,
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => SortOrder::parse(raw)
                .ok_or_else(|| AppError::validation("sort must be one of: latest, oldest, likes"))?,
            None => SortOrder::default(),
        };
        Ok(ContentQuery { search, limit, sort })
    }
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "lf_content"
    }))
}

// ==================== Content ====================

pub async fn list_content(
    path: web::Path<String>,
    params: web::Query<ListParams>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let kind = collection_kind(&path.into_inner())?;
    let query = params.into_inner().into_query()?;

    let contents = state.contents.clone();
    let items = web::block(move || contents.find(kind, &query)).await??;
    log::debug!("Listed {} {}", items.len(), kind.collection());
    Ok(HttpResponse::Ok().json(items))
}

pub async fn create_content(
    path: web::Path<String>,
    body: web::Json<NewContent>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let kind = collection_kind(&path.into_inner())?;
    let request = body.into_inner();
    require_text("title", &request.title)?;
    require_text("body", &request.body)?;
    require_text("author", &request.author)?;

    let contents = state.contents.clone();
    let item = web::block(move || contents.create(kind, request)).await??;
    log::info!("Created {} {}", kind.as_str(), item.id);
    Ok(HttpResponse::Created().json(item))
}

/// Single item with the caller's like/bookmark flags
pub async fn get_content(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let (collection, id) = path.into_inner();
    let kind = collection_kind(&collection)?;
    let view = state.resolver.resolve_status(kind, &id, authorization(&req)?).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn update_content(
    path: web::Path<(String, String)>,
    body: web::Json<ContentPatch>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let (collection, id) = path.into_inner();
    let kind = collection_kind(&collection)?;
    let patch = body.into_inner();
    if patch.is_empty() {
        return Err(AppError::validation("at least one of title, body, author is required"));
    }
    for (field, value) in [("title", &patch.title), ("body", &patch.body), ("author", &patch.author)] {
        if let Some(value) = value {
            require_text(field, value)?;
        }
    }

    let contents = state.contents.clone();
    let target = id.clone();
    let updated = web::block(move || match contents.find_by_id(&target)? {
        Some(item) if item.kind == kind => contents.update(&target, patch),
        _ => Ok(None),
    })
    .await??;

    let item = updated.ok_or_else(|| AppError::not_found(format!("{} {}", kind.as_str(), id)))?;
    Ok(HttpResponse::Ok().json(item))
}

pub async fn delete_content(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let (collection, id) = path.into_inner();
    let kind = collection_kind(&collection)?;

    let contents = state.contents.clone();
    let target = id.clone();
    let deleted = web::block(move || match contents.find_by_id(&target)? {
        Some(item) if item.kind == kind => contents.delete(&target),
        _ => Ok(None),
    })
    .await??;

    let item = deleted.ok_or_else(|| AppError::not_found(format!("{} {}", kind.as_str(), id)))?;
    log::info!("Deleted {} {}", kind.as_str(), item.id);
    Ok(HttpResponse::Ok().json(item))
}

/// Deletes the listed ids that belong to this collection
pub async fn delete_many_content(
    path: web::Path<String>,
    body: web::Json<BulkDeleteRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let kind = collection_kind(&path.into_inner())?;
    let ids = body.into_inner().ids;
    if ids.is_empty() {
        return Err(AppError::validation("ids must not be empty"));
    }

    let contents = state.contents.clone();
    let deleted = web::block(move || {
        let mut owned = Vec::with_capacity(ids.len());
        for id in ids {
            if matches!(contents.find_by_id(&id)?, Some(item) if item.kind == kind) {
                owned.push(id);
            }
        }
        contents.delete_many(&owned)
    })
    .await??;

    log::info!("Bulk deleted {} {}", deleted.len(), kind.collection());
    Ok(HttpResponse::Ok().json(deleted))
}

// ==================== Likes & bookmarks ====================

/// The token identity wins; the body `user_id` is only used for anonymous requests.
fn acting_user(identity: Option<CallerIdentity>, body_user: Option<String>) -> AppResult<String> {
    let body_user = body_user.filter(|user| !user.trim().is_empty());
    match (identity, body_user) {
        (Some(caller), Some(user)) if caller.user_id != user => {
            Err(AppError::validation("user_id does not match the access token"))
        }
        (Some(caller), _) => Ok(caller.user_id),
        (None, Some(user)) => Ok(user),
        (None, None) => Err(AppError::validation("user_id is required")),
    }
}

async fn toggle(
    kind: RelationKind,
    req: HttpRequest,
    body: web::Json<ToggleRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let identity = state.tokens.identify(bearer(&req)?)?;
    let request = body.into_inner();
    let user_id = acting_user(identity, request.user_id)?;

    let item = state.toggles.toggle(kind, &user_id, &request.post_id).await?;
    Ok(HttpResponse::Ok().json(item))
}

pub async fn toggle_like(
    req: HttpRequest,
    body: web::Json<ToggleRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    toggle(RelationKind::Like, req, body, state).await
}

pub async fn toggle_bookmark(
    req: HttpRequest,
    body: web::Json<ToggleRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    toggle(RelationKind::Bookmark, req, body, state).await
}

async fn list_related(kind: RelationKind, req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let caller = state
        .tokens
        .identify(bearer(&req)?)?
        .ok_or_else(|| AppError::authentication("bearer token required"))?;

    let relations = state.relations.clone();
    let items = web::block(move || relations.list_for_user(kind, &caller.user_id)).await??;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn list_liked(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    list_related(RelationKind::Like, req, state).await
}

pub async fn list_bookmarked(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    list_related(RelationKind::Bookmark, req, state).await
}

// ==================== Comments ====================

/// Get comments for a specific item
pub async fn get_comments(path: web::Path<String>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    log::debug!("Getting comments for post: {}", post_id);

    let comments = state.comments.clone();
    let listed = web::block(move || comments.get_comments_by_post(&post_id)).await??;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "count": listed.len(),
        "comments": listed,
    })))
}

/// Add a new comment
pub async fn add_comment(
    body: web::Json<CreateCommentRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    log::debug!("Adding comment for post: {}", request.post_id);
    require_text("author", &request.author)?;
    require_text("content", &request.content)?;

    let post_id = request.post_id.clone();
    let comments = state.comments.clone();
    let comment = web::block(move || comments.add_comment(request))
        .await??
        .ok_or_else(|| AppError::not_found(format!("content item {}", post_id)))?;

    log::info!("Comment added successfully: {}", comment.id);
    Ok(HttpResponse::Created().json(serde_json::json!({
        "status": "success",
        "message": "Comment added successfully",
        "comment": comment
    })))
}

pub async fn delete_comment(path: web::Path<String>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let comments = state.comments.clone();
    let target = id.clone();
    if !web::block(move || comments.delete_comment(&target)).await?? {
        return Err(AppError::not_found(format!("comment {}", id)));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "Comment deleted"
    })))
}

/// Configure routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies get the same error envelope as everything else
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    )
    .route("/health", web::get().to(health_check))
    // Fixed API routes go before the collection wildcard
    .route("/api/likes", web::post().to(toggle_like))
    .route("/api/likes", web::get().to(list_liked))
    .route("/api/bookmarks", web::post().to(toggle_bookmark))
    .route("/api/bookmarks", web::get().to(list_bookmarked))
    .route("/api/comments", web::post().to(add_comment))
    .route("/api/comments/{post_id}", web::get().to(get_comments))
    .route("/api/comments/{id}", web::delete().to(delete_comment))
    // Content collections: posts, magazines, recipes, reviews
    .route("/api/{collection}", web::get().to(list_content))
    .route("/api/{collection}", web::post().to(create_content))
    .route("/api/{collection}", web::delete().to(delete_many_content))
    .route("/api/{collection}/{id}", web::get().to(get_content))
    .route("/api/{collection}/{id}", web::put().to(update_content))
    .route("/api/{collection}/{id}", web::delete().to(delete_content));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_support::{token_for, SECRET};
    use crate::config::Config;
    use crate::connection::Database;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn state() -> AppState {
        let mut config = Config::default();
        config.auth.access_token_secret = SECRET.to_string();
        AppState::new(Database::open_in_memory().unwrap(), &config)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn bearer_header(user: &str) -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {}", token_for(user)))
    }

    #[actix_web::test]
    async fn test_like_flow_through_http() {
        let app = app!(state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "Rye", "body": "dense loaf", "author": "anna"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/likes")
            .insert_header(bearer_header("u1"))
            .set_json(json!({"post_id": id}))
            .to_request();
        let liked: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(liked["like_count"], 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .insert_header(bearer_header("u1"))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["is_liked"], true);
        assert_eq!(view["is_bookmarked"], false);
        assert_eq!(view["title"], "Rye");

        let req = test::TestRequest::get().uri(&format!("/api/posts/{}", id)).to_request();
        let anonymous: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(anonymous["is_liked"], false);

        let req = test::TestRequest::post()
            .uri("/api/likes")
            .set_json(json!({"post_id": id, "user_id": "u1"}))
            .to_request();
        let unliked: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unliked["like_count"], 0);
    }

    #[actix_web::test]
    async fn test_not_found_and_wrong_collection() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Recipe, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/recipes/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");

        let req = test::TestRequest::get().uri(&format!("/api/posts/{}", item.id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/breads").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/bookmarks")
            .set_json(json!({"post_id": "missing", "user_id": "u1"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Post, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        for value in ["Bearer not-a-token", "Token abc"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/posts/{}", item.id))
                .insert_header((header::AUTHORIZATION, value))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_wrong_collection_with_bad_token_is_not_found() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Post, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        for uri in [format!("/api/recipes/{}", item.id), "/api/posts/missing".to_string()] {
            for value in ["Bearer not-a-token", "Token abc"] {
                let req = test::TestRequest::get()
                    .uri(&uri)
                    .insert_header((header::AUTHORIZATION, value))
                    .to_request();
                assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
            }
        }
    }

    #[actix_web::test]
    async fn test_toggle_user_resolution() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Post, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/likes")
            .set_json(json!({"post_id": item.id}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/likes")
            .insert_header(bearer_header("u1"))
            .set_json(json!({"post_id": item.id, "user_id": "u2"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/likes")
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
    }

    #[actix_web::test]
    async fn test_search_limit_and_validation() {
        let app = app!(state());

        for (title, author) in [("Sourdough", "anna"), ("Baguette", "ben"), ("Dough balls", "carl")] {
            let req = test::TestRequest::post()
                .uri("/api/recipes")
                .set_json(json!({"title": title, "body": "bake it", "author": author}))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/recipes?q=DOUGH").to_request();
        let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 2);

        let req = test::TestRequest::get().uri("/api/recipes?limit=1&sort=oldest").to_request();
        let limited: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0]["title"], "Sourdough");

        let req = test::TestRequest::get().uri("/api/recipes?q=nothing").to_request();
        let empty: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(empty.is_empty());

        let req = test::TestRequest::get().uri("/api/recipes?limit=many").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/recipes")
            .set_json(json!({"title": " ", "body": "b", "author": "a"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let state = state();
        let keep = state
            .contents
            .create(ContentKind::Review, crate::content::test_support::new_content("keep", "b", "a"))
            .unwrap();
        let dropped = state
            .contents
            .create(ContentKind::Review, crate::content::test_support::new_content("drop", "b", "a"))
            .unwrap();
        let other = state
            .contents
            .create(ContentKind::Post, crate::content::test_support::new_content("post", "b", "a"))
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/api/reviews/{}", keep.id))
            .set_json(json!({"title": "kept"}))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["title"], "kept");

        let req = test::TestRequest::put()
            .uri(&format!("/api/reviews/{}", keep.id))
            .set_json(json!({}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete()
            .uri("/api/reviews")
            .set_json(json!({"ids": [dropped.id, other.id, "missing"]}))
            .to_request();
        let deleted: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0]["id"], dropped.id.as_str());

        // Posts are not deleted through the reviews collection
        let req = test::TestRequest::get().uri(&format!("/api/posts/{}", other.id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri(&format!("/api/reviews/{}", keep.id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let req = test::TestRequest::delete().uri(&format!("/api/reviews/{}", keep.id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bookmark_listing_requires_token() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Magazine, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/bookmarks").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/bookmarks")
            .insert_header(bearer_header("u1"))
            .set_json(json!({"post_id": item.id}))
            .to_request();
        let bookmarked: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(bookmarked["bookmark_count"], 1);

        let req = test::TestRequest::get()
            .uri("/api/bookmarks")
            .insert_header(bearer_header("u1"))
            .to_request();
        let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], item.id.as_str());
    }

    #[actix_web::test]
    async fn test_comment_routes() {
        let state = state();
        let item = state
            .contents
            .create(ContentKind::Post, crate::content::test_support::new_content("t", "b", "a"))
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/comments")
            .set_json(json!({"post_id": item.id, "author": "reader", "content": "Great loaf"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let added: Value = test::read_body_json(resp).await;
        let comment_id = added["comment"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&format!("/api/comments/{}", item.id)).to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["count"], 1);
        assert_eq!(listed["comments"][0]["content"], "Great loaf");

        let req = test::TestRequest::post()
            .uri("/api/comments")
            .set_json(json!({"post_id": "missing", "author": "reader", "content": "hi"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&format!("/api/comments/{}", comment_id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_acting_user() {
        let caller = || Some(CallerIdentity { user_id: "u1".to_string() });
        assert_eq!(acting_user(caller(), None).unwrap(), "u1");
        assert_eq!(acting_user(caller(), Some("u1".to_string())).unwrap(), "u1");
        assert_eq!(acting_user(None, Some("u9".to_string())).unwrap(), "u9");
        assert!(acting_user(caller(), Some("u2".to_string())).is_err());
        assert!(acting_user(None, Some("  ".to_string())).is_err());
        assert!(acting_user(None, None).is_err());
    }
}
