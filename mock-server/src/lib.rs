use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// Token accepted for the seeded `muiscript` account.
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USER: &str = "muiscript";
/// Id of a seeded item owned by [`TEST_USER`].
pub const SEEDED_ITEM: &str = "b4ca1773580317e7112e";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub permanent_id: u64,
    pub name: String,
    pub profile_image_url: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub organization: Option<String>,
    pub website_url: Option<String>,
    pub team_only: bool,
    pub items_count: u64,
    pub followees_count: u64,
    pub followers_count: u64,
    pub github_login_name: Option<String>,
    pub twitter_screen_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemTag {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub url: String,
    pub body: String,
    pub rendered_body: String,
    pub private: bool,
    pub coediting: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub comments_count: u64,
    pub likes_count: u64,
    pub reactions_count: u64,
    pub page_views_count: Option<u64>,
    pub user: User,
    pub tags: Vec<ItemTag>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub icon_url: Option<String>,
    pub items_count: u64,
    pub followers_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub rendered_body: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub user: User,
    #[serde(skip)]
    pub item_id: String,
}

#[derive(Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<ItemTag>,
    #[serde(default)]
    pub private: bool,
}

#[derive(Deserialize)]
pub struct CommentDraft {
    pub body: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    pub query: Option<String>,
    pub sort: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

/// In-memory backing store. Collections are kept oldest first.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub items: Vec<Item>,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
    /// (follower, followee)
    pub follows: HashSet<(String, String)>,
    /// (user, item)
    pub stocks: HashSet<(String, String)>,
    /// (user, comment)
    pub thanks: HashSet<(String, String)>,
    /// (user, tag)
    pub tag_follows: HashSet<(String, String)>,
    /// token -> user id
    pub tokens: HashMap<String, String>,
}

pub type Db = Arc<RwLock<Store>>;

type Reply = Result<Response, Response>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/followees", get(user_followees))
        .route("/users/{id}/followers", get(user_followers))
        .route("/users/{id}/items", get(user_items))
        .route("/users/{id}/stocks", get(user_stocks))
        .route("/users/{id}/following_tags", get(user_following_tags))
        .route(
            "/users/{id}/following",
            get(is_following).put(follow).delete(unfollow),
        )
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route(
            "/items/{id}/comments",
            get(item_comments).post(create_comment),
        )
        .route("/items/{id}/stockers", get(item_stockers))
        .route(
            "/items/{id}/stock",
            get(is_stocked).put(stock).delete(unstock),
        )
        .route("/tags", get(list_tags))
        .route("/tags/{id}", get(get_tag))
        .route(
            "/comments/{id}",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
        .route("/comments/{id}/thank", put(thank).delete(unthank))
        .route("/authenticated_user", get(authenticated_user))
        .route("/authenticated_user/items", get(authenticated_user_items));
    Router::new().nest("/api/v2", api).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "serving mock Qiita API");
    }
    axum::serve(listener, app()).await
}

// --- helpers ---

fn error(status: StatusCode, kind: &str) -> Response {
    debug!(status = status.as_u16(), kind, "rejecting request");
    let body = serde_json::json!({ "message": kind.replace('_', " "), "type": kind });
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "not_found")
}

fn forbidden() -> Response {
    error(StatusCode::FORBIDDEN, "forbidden")
}

fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Resolve the bearer token to a user id.
fn authenticate(headers: &HeaderMap, store: &Store) -> Result<String, Response> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| store.tokens.get(token))
        .cloned()
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "unauthorized"))
}

fn find_user(store: &Store, id: &str) -> Result<User, Response> {
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(not_found)
}

fn find_item(store: &Store, id: &str) -> Result<Item, Response> {
    store
        .items
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .ok_or_else(not_found)
}

fn find_comment(store: &Store, id: &str) -> Result<Comment, Response> {
    store
        .comments
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(not_found)
}

/// Serve one page of `all` with `Link` and `Total-Count` headers.
fn paginate<T: Serialize>(headers: &HeaderMap, path: &str, params: &ListParams, all: Vec<T>) -> Reply {
    if !(1..=100).contains(&params.page) || !(1..=100).contains(&params.per_page) {
        return Err(error(StatusCode::BAD_REQUEST, "bad_request"));
    }
    let total = all.len();
    debug!(path, page = params.page, per_page = params.per_page, total, "serving page");
    let per_page = params.per_page as usize;
    let last = total.div_ceil(per_page).max(1);

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let link = |page: usize, rel: &str| {
        format!("<http://{host}/api/v2/{path}?page={page}&per_page={per_page}>; rel=\"{rel}\"")
    };
    let page = params.page as usize;
    let mut links = vec![link(1, "first")];
    if page > 1 {
        links.push(link((page - 1).min(last), "prev"));
    }
    if page < last {
        links.push(link(page + 1, "next"));
    }
    links.push(link(last, "last"));

    let items: Vec<T> = all
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    let mut response = Json(items).into_response();
    let out = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&links.join(", ")) {
        out.insert(header::LINK, value);
    }
    out.insert("total-count", HeaderValue::from(total));
    Ok(response)
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..20].to_string()
}

fn render(body: &str) -> String {
    format!("<p>{body}</p>")
}

// --- users ---

async fn list_users(State(db): State<Db>, headers: HeaderMap, Query(params): Query<ListParams>) -> Reply {
    let store = db.read().await;
    let users: Vec<User> = store.users.iter().rev().cloned().collect();
    paginate(&headers, "users", &params, users)
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    Ok(Json(find_user(&store, &id)?).into_response())
}

async fn user_followees(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_user(&store, &id)?;
    let users: Vec<User> = store
        .users
        .iter()
        .filter(|u| store.follows.contains(&(id.clone(), u.id.clone())))
        .cloned()
        .collect();
    paginate(&headers, &format!("users/{id}/followees"), &params, users)
}

async fn user_followers(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_user(&store, &id)?;
    let users: Vec<User> = store
        .users
        .iter()
        .filter(|u| store.follows.contains(&(u.id.clone(), id.clone())))
        .cloned()
        .collect();
    paginate(&headers, &format!("users/{id}/followers"), &params, users)
}

async fn user_items(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_user(&store, &id)?;
    let items: Vec<Item> = store
        .items
        .iter()
        .rev()
        .filter(|i| i.user.id == id && !i.private)
        .cloned()
        .collect();
    paginate(&headers, &format!("users/{id}/items"), &params, items)
}

async fn user_stocks(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_user(&store, &id)?;
    let items: Vec<Item> = store
        .items
        .iter()
        .filter(|i| store.stocks.contains(&(id.clone(), i.id.clone())))
        .cloned()
        .collect();
    paginate(&headers, &format!("users/{id}/stocks"), &params, items)
}

async fn user_following_tags(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_user(&store, &id)?;
    let tags: Vec<Tag> = store
        .tags
        .iter()
        .filter(|t| store.tag_follows.contains(&(id.clone(), t.id.clone())))
        .cloned()
        .collect();
    paginate(&headers, &format!("users/{id}/following_tags"), &params, tags)
}

async fn is_following(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    let me = authenticate(&headers, &store)?;
    if store.follows.contains(&(me, id)) {
        Ok(no_content())
    } else {
        Err(not_found())
    }
}

async fn follow(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    find_user(&store, &id)?;
    if me == id || !store.follows.insert((me, id)) {
        return Err(forbidden());
    }
    Ok(no_content())
}

async fn unfollow(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    find_user(&store, &id)?;
    if !store.follows.remove(&(me, id)) {
        return Err(forbidden());
    }
    Ok(no_content())
}

// --- items ---

async fn list_items(State(db): State<Db>, headers: HeaderMap, Query(params): Query<ListParams>) -> Reply {
    let store = db.read().await;
    let query = params.query.clone().unwrap_or_default();
    let items: Vec<Item> = store
        .items
        .iter()
        .rev()
        .filter(|i| !i.private && matches_query(i, &query))
        .cloned()
        .collect();
    paginate(&headers, "items", &params, items)
}

/// Supports `tag:NAME`, `user:ID` and plain title substrings.
fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if let Some(tag) = query.strip_prefix("tag:") {
        return item.tags.iter().any(|t| t.name.eq_ignore_ascii_case(tag));
    }
    if let Some(user) = query.strip_prefix("user:") {
        return item.user.id == user;
    }
    item.title.contains(query)
}

async fn create_item(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(draft): Json<ItemDraft>,
) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    if draft.title.trim().is_empty() || draft.body.trim().is_empty() || draft.tags.is_empty() {
        return Err(forbidden());
    }
    let user = find_user(&store, &me)?;
    let id = new_id();
    let created = now();
    let item = Item {
        url: format!("https://qiita.com/{me}/items/{id}"),
        id,
        title: draft.title,
        rendered_body: render(&draft.body),
        body: draft.body,
        private: draft.private,
        coediting: false,
        created_at: created,
        updated_at: created,
        comments_count: 0,
        likes_count: 0,
        reactions_count: 0,
        page_views_count: Some(0),
        user,
        tags: draft.tags,
    };
    info!(id = %item.id, user = %item.user.id, "item created");
    store.items.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

async fn get_item(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    Ok(Json(find_item(&store, &id)?).into_response())
}

async fn update_item(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(draft): Json<ItemDraft>,
) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let item = store
        .items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(not_found)?;
    if item.user.id != me || draft.title.trim().is_empty() || draft.tags.is_empty() {
        return Err(forbidden());
    }
    item.title = draft.title;
    item.rendered_body = render(&draft.body);
    item.body = draft.body;
    item.tags = draft.tags;
    item.private = draft.private;
    item.updated_at = now();
    Ok(Json(item.clone()).into_response())
}

async fn delete_item(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let item = find_item(&store, &id)?;
    if item.user.id != me {
        return Err(forbidden());
    }
    info!(%id, "item deleted");
    store.items.retain(|i| i.id != id);
    store.comments.retain(|c| c.item_id != id);
    store.stocks.retain(|(_, item_id)| *item_id != id);
    Ok(no_content())
}

async fn item_comments(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    find_item(&store, &id)?;
    let comments: Vec<Comment> = store
        .comments
        .iter()
        .filter(|c| c.item_id == id)
        .cloned()
        .collect();
    Ok(Json(comments).into_response())
}

async fn create_comment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(draft): Json<CommentDraft>,
) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    find_item(&store, &id)?;
    if draft.body.trim().is_empty() {
        return Err(forbidden());
    }
    let created = now();
    let comment = Comment {
        id: new_id(),
        rendered_body: render(&draft.body),
        body: draft.body,
        created_at: created,
        updated_at: created,
        user: find_user(&store, &me)?,
        item_id: id.clone(),
    };
    info!(id = %comment.id, item = %id, "comment created");
    store.comments.push(comment.clone());
    if let Some(item) = store.items.iter_mut().find(|i| i.id == id) {
        item.comments_count += 1;
    }
    Ok((StatusCode::CREATED, Json(comment)).into_response())
}

async fn item_stockers(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    find_item(&store, &id)?;
    let users: Vec<User> = store
        .users
        .iter()
        .filter(|u| store.stocks.contains(&(u.id.clone(), id.clone())))
        .cloned()
        .collect();
    paginate(&headers, &format!("items/{id}/stockers"), &params, users)
}

async fn is_stocked(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    let me = authenticate(&headers, &store)?;
    if store.stocks.contains(&(me, id)) {
        Ok(no_content())
    } else {
        Err(not_found())
    }
}

async fn stock(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    find_item(&store, &id)?;
    if !store.stocks.insert((me, id)) {
        return Err(forbidden());
    }
    Ok(no_content())
}

async fn unstock(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    find_item(&store, &id)?;
    if !store.stocks.remove(&(me, id)) {
        return Err(forbidden());
    }
    Ok(no_content())
}

// --- tags ---

async fn list_tags(State(db): State<Db>, headers: HeaderMap, Query(params): Query<ListParams>) -> Reply {
    let store = db.read().await;
    let mut tags = store.tags.clone();
    match params.sort.as_deref() {
        Some("name") => tags.sort_by(|a, b| a.id.to_lowercase().cmp(&b.id.to_lowercase())),
        _ => tags.sort_by(|a, b| b.items_count.cmp(&a.items_count)),
    }
    paginate(&headers, "tags", &params, tags)
}

async fn get_tag(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    store
        .tags
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(&id))
        .map(|t| Json(t.clone()).into_response())
        .ok_or_else(not_found)
}

// --- comments ---

async fn get_comment(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    Ok(Json(find_comment(&store, &id)?).into_response())
}

async fn update_comment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(draft): Json<CommentDraft>,
) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let comment = store
        .comments
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(not_found)?;
    if comment.user.id != me || draft.body.trim().is_empty() {
        return Err(forbidden());
    }
    comment.rendered_body = render(&draft.body);
    comment.body = draft.body;
    comment.updated_at = now();
    Ok(Json(comment.clone()).into_response())
}

async fn delete_comment(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let comment = find_comment(&store, &id)?;
    if comment.user.id != me {
        return Err(forbidden());
    }
    store.comments.retain(|c| c.id != id);
    if let Some(item) = store.items.iter_mut().find(|i| i.id == comment.item_id) {
        item.comments_count = item.comments_count.saturating_sub(1);
    }
    Ok(no_content())
}

async fn thank(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let comment = find_comment(&store, &id)?;
    if comment.user.id == me || !store.thanks.insert((me, id)) {
        return Err(forbidden());
    }
    Ok(Json(comment).into_response())
}

async fn unthank(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    let me = authenticate(&headers, &store)?;
    let comment = find_comment(&store, &id)?;
    if !store.thanks.remove(&(me, id)) {
        return Err(forbidden());
    }
    Ok(Json(comment).into_response())
}

// --- authenticated user ---

async fn authenticated_user(State(db): State<Db>, headers: HeaderMap) -> Reply {
    let store = db.read().await;
    let me = authenticate(&headers, &store)?;
    Ok(Json(find_user(&store, &me)?).into_response())
}

async fn authenticated_user_items(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Reply {
    let store = db.read().await;
    let me = authenticate(&headers, &store)?;
    let items: Vec<Item> = store
        .items
        .iter()
        .rev()
        .filter(|i| i.user.id == me)
        .cloned()
        .collect();
    paginate(&headers, "authenticated_user/items", &params, items)
}

// --- fixtures ---

impl Store {
    /// A small, deterministic data set.
    ///
    /// `muiscript` owns [`TEST_TOKEN`], follows `mizchi` and `user01`..=`user11`
    /// and has stocked [`SEEDED_ITEM`]. `mizchi` and `yaotti` have commented
    /// on that item.
    pub fn seeded() -> Self {
        let mut store = Store::default();

        let user = |id: &str, permanent_id: u64| User {
            id: id.to_string(),
            permanent_id,
            name: id.to_string(),
            profile_image_url: format!("https://example.com/{id}.png"),
            ..User::default()
        };
        store.users.push(user(TEST_USER, 159260));
        store.users.push(user("mizchi", 2));
        store.users.push(user("yaotti", 1));
        for n in 1..=11 {
            store.users.push(user(&format!("user{n:02}"), 1000 + n));
        }

        store.follows.insert((TEST_USER.into(), "mizchi".into()));
        for n in 1..=11 {
            store.follows.insert((TEST_USER.into(), format!("user{n:02}")));
        }
        store.follows.insert(("yaotti".into(), TEST_USER.into()));

        let stamp = |y, m, d, h, mi, s| {
            jst()
                .with_ymd_and_hms(y, m, d, h, mi, s)
                .single()
                .expect("valid fixture timestamp")
        };
        let author = store.users[0].clone();
        store.items.push(Item {
            id: SEEDED_ITEM.to_string(),
            title: "react-router@v4を使ってみよう：シンプルなtutorial".to_string(),
            url: format!("https://qiita.com/{TEST_USER}/items/{SEEDED_ITEM}"),
            body: "`React`でルーティングをするためのライブラリ".to_string(),
            rendered_body: render("<code>React</code>でルーティングをするためのライブラリ"),
            private: false,
            coediting: false,
            created_at: stamp(2017, 6, 27, 15, 36, 55),
            updated_at: stamp(2019, 1, 3, 14, 30, 25),
            comments_count: 2,
            likes_count: 309,
            reactions_count: 0,
            page_views_count: None,
            user: author.clone(),
            tags: vec![
                ItemTag {
                    name: "React".into(),
                    versions: vec![],
                },
                ItemTag {
                    name: "react-router".into(),
                    versions: vec!["4.1.1".into()],
                },
            ],
        });
        store.items.push(Item {
            id: "0123456789abcdef0123".to_string(),
            title: "Rust ownership notes".to_string(),
            url: format!("https://qiita.com/{TEST_USER}/items/0123456789abcdef0123"),
            body: "Borrowing".to_string(),
            rendered_body: render("Borrowing"),
            private: false,
            coediting: false,
            created_at: stamp(2020, 2, 1, 9, 0, 0),
            updated_at: stamp(2020, 2, 1, 9, 0, 0),
            comments_count: 0,
            likes_count: 12,
            reactions_count: 0,
            page_views_count: None,
            user: author,
            tags: vec![ItemTag {
                name: "Rust".into(),
                versions: vec!["1.41".into()],
            }],
        });
        store.stocks.insert((TEST_USER.into(), SEEDED_ITEM.into()));
        store.stocks.insert(("yaotti".into(), SEEDED_ITEM.into()));

        for (n, commenter) in [(1, "yaotti"), (2, "mizchi")] {
            let user = store.users.iter().find(|u| u.id == commenter).cloned().unwrap_or_default();
            store.comments.push(Comment {
                id: format!("c0000000000000000{n:03}"),
                body: format!("comment {n}"),
                rendered_body: render(&format!("comment {n}")),
                created_at: stamp(2017, 7, n, 10, 0, 0),
                updated_at: stamp(2017, 7, n, 10, 0, 0),
                user,
                item_id: SEEDED_ITEM.to_string(),
            });
        }

        for (id, items_count, followers_count) in
            [("React", 2693, 2403), ("Rust", 1500, 1200), ("Go", 2000, 1800)]
        {
            store.tags.push(Tag {
                id: id.to_string(),
                icon_url: None,
                items_count,
                followers_count,
            });
        }
        store.tag_follows.insert((TEST_USER.into(), "Rust".into()));

        store.tokens.insert(TEST_TOKEN.into(), TEST_USER.into());
        store
    }
}
