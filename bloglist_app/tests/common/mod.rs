//! In-process mock of the blog API.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct MockUser {
    pub id: &'static str,
    pub username: &'static str,
    pub name: &'static str,
    pub password: &'static str,
    pub token: &'static str,
}

pub const ROOT: MockUser = MockUser {
    id: "u-root",
    username: "root",
    name: "Superuser",
    password: "salainen",
    token: "token-root",
};

pub const OTHER: MockUser = MockUser {
    id: "u-ml",
    username: "mluukkai",
    name: "Matti Luukkainen",
    password: "secret",
    token: "token-ml",
};

static USERS: [&MockUser; 2] = [&ROOT, &OTHER];

#[derive(Debug, Clone)]
pub struct StoredBlog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: Option<i64>,
    pub user_id: String,
}

#[derive(Default)]
pub struct BackendState {
    pub blogs: Vec<StoredBlog>,
    /// `Authorization` header of every mutating request, in order.
    pub authorizations: Vec<Option<String>>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    pub state: Arc<Mutex<BackendState>>,
}

impl MockBackend {
    pub fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock();
            state.blogs = vec![
                stored("b-react", "React patterns", Some(7), ROOT.id),
                stored("b-rust", "Rust in production", None, OTHER.id),
                stored("b-go", "Go statement considered harmful", Some(2), ROOT.id),
            ];
        }
        backend
    }

    pub fn likes_of(&self, id: &str) -> Option<i64> {
        self.state
            .lock()
            .blogs
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| b.likes)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.lock().blogs.iter().any(|b| b.id == id)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.state.lock().authorizations.last().cloned().flatten()
    }
}

fn stored(id: &str, title: &str, likes: Option<i64>, user_id: &str) -> StoredBlog {
    StoredBlog {
        id: id.to_string(),
        title: title.to_string(),
        author: "Michael Chan".to_string(),
        url: format!("https://blogs.test/{}", id),
        likes,
        user_id: user_id.to_string(),
    }
}

fn user_by_id(id: &str) -> Option<&'static MockUser> {
    USERS.iter().copied().find(|u| u.id == id)
}

fn populated(blog: &StoredBlog) -> serde_json::Value {
    let mut value = json!({
        "id": blog.id,
        "title": blog.title,
        "author": blog.author,
        "url": blog.url,
    });
    if let Some(likes) = blog.likes {
        value["likes"] = json!(likes);
    }
    if let Some(user) = user_by_id(&blog.user_id) {
        value["user"] = json!({ "id": user.id, "username": user.username, "name": user.name });
    }
    value
}

/// Create and update responses carry the bare owner id.
fn unpopulated(blog: &StoredBlog) -> serde_json::Value {
    let mut value = populated(blog);
    value["user"] = json!(blog.user_id);
    value
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authenticate(backend: &MockBackend, headers: &HeaderMap) -> Option<&'static MockUser> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    backend.state.lock().authorizations.push(auth.clone());

    let token = auth?.strip_prefix("Bearer ")?.to_string();
    USERS.iter().copied().find(|u| u.token == token)
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct CreateBody {
    title: String,
    #[serde(default)]
    author: String,
    url: String,
}

#[derive(Deserialize)]
struct UpdateBody {
    likes: i64,
    title: String,
    author: String,
    url: String,
}

async fn login(Json(body): Json<LoginBody>) -> Response {
    match USERS
        .iter()
        .find(|u| u.username == body.username && u.password == body.password)
    {
        Some(user) => Json(json!({
            "token": user.token,
            "username": user.username,
            "name": user.name,
        }))
        .into_response(),
        None => error(StatusCode::UNAUTHORIZED, "invalid username or password"),
    }
}

async fn list_blogs(State(backend): State<MockBackend>) -> Response {
    let blogs: Vec<_> = backend.state.lock().blogs.iter().map(populated).collect();
    Json(blogs).into_response()
}

async fn create_blog(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<CreateBody>,
) -> Response {
    let Some(user) = authenticate(&backend, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "token missing or invalid");
    };
    if body.title.is_empty() || body.url.is_empty() {
        return error(StatusCode::BAD_REQUEST, "title and url are required");
    }

    let blog = StoredBlog {
        id: format!("b-{}", uuid::Uuid::new_v4()),
        title: body.title,
        author: body.author,
        url: body.url,
        likes: None,
        user_id: user.id.to_string(),
    };
    backend.state.lock().blogs.push(blog.clone());
    (StatusCode::CREATED, Json(unpopulated(&blog))).into_response()
}

async fn update_blog(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Response {
    if authenticate(&backend, &headers).is_none() {
        return error(StatusCode::UNAUTHORIZED, "token missing or invalid");
    }

    let mut state = backend.state.lock();
    let Some(blog) = state.blogs.iter_mut().find(|b| b.id == id) else {
        return error(StatusCode::NOT_FOUND, "blog not found");
    };
    blog.likes = Some(body.likes);
    blog.title = body.title;
    blog.author = body.author;
    blog.url = body.url;
    Json(unpopulated(blog)).into_response()
}

async fn delete_blog(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let Some(user) = authenticate(&backend, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "token missing or invalid");
    };

    let mut state = backend.state.lock();
    let Some(pos) = state.blogs.iter().position(|b| b.id == id) else {
        return error(StatusCode::NOT_FOUND, "blog not found");
    };
    if state.blogs[pos].user_id != user.id {
        return error(StatusCode::FORBIDDEN, "only the creator can delete a blog");
    }
    state.blogs.remove(pos);
    StatusCode::NO_CONTENT.into_response()
}

pub fn router(backend: MockBackend) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/blogs", post(create_blog).get(list_blogs))
        .route("/api/blogs/{id}", put(update_blog).delete(delete_blog))
        .with_state(backend)
}

/// Serve a seeded backend on a random local port. Returns its base URL.
pub async fn spawn_backend() -> (String, MockBackend) {
    let backend = MockBackend::seeded();
    let app = router(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend crashed");
    });

    (format!("http://{}", addr), backend)
}
