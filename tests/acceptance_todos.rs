use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::domain::repository::TodoRepository;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::sqlite_repo::SqliteTodoRepository;
use axum::body::to_bytes;
use axum::Router;
use serde_json::json;

async fn app() -> Router {
    // use in-memory sqlite for tests
    let repo = SqliteTodoRepository::connect("sqlite::memory:").await.unwrap();
    repo.init().await.unwrap();
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_create_update_delete_scenario() {
    let app = app().await;

    // create
    let res = request(&app, "POST", "/todos", Some(json!({ "content": "buy milk", "completed": false }))).await;
    assert_eq!(res.status(), 201);
    let body = body_json(res).await;
    assert_eq!(body, json!({ "todo_id": 1, "content": "buy milk", "completed": false }));

    // list contains it
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body, json!([{ "todo_id": 1, "content": "buy milk", "completed": false }]));

    // partial update: only completed changes
    let res = request(&app, "PUT", "/todos/1", Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body, json!({ "todo_id": 1, "content": "buy milk", "completed": true }));

    // delete
    let res = request(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(res.status(), 204);
    let bytes = to_bytes(res.into_body(), 1024).await.unwrap();
    assert!(bytes.is_empty());

    // get after delete
    let res = request(&app, "GET", "/todos/1", None).await;
    assert_eq!(res.status(), 404);
    let body = body_json(res).await;
    assert_eq!(body, json!({ "detail": "Todo with id 1 not found" }));
}

#[tokio::test]
async fn banner_reports_service_metadata() {
    let app = app().await;
    let res = request(&app, "GET", "/", None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Welcome to the Todo API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["docs"], "/docs");
}

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let app = app().await;
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn create_without_content_is_unprocessable() {
    let app = app().await;

    let res = request(&app, "POST", "/todos", Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 422);

    let res = request(&app, "POST", "/todos", Some(json!({ "content": "" }))).await;
    assert_eq!(res.status(), 422);

    // nothing was stored
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn operations_on_absent_ids_are_not_found() {
    let app = app().await;

    for (method, body) in [("GET", None), ("PUT", Some(json!({ "completed": true }))), ("DELETE", None)] {
        let res = request(&app, method, "/todos/99", body).await;
        assert_eq!(res.status(), 404, "{method} should 404");
        let body = body_json(res).await;
        assert_eq!(body, json!({ "detail": "Todo with id 99 not found" }));
    }
}

#[tokio::test]
async fn deleted_ids_are_not_reissued() {
    let app = app().await;

    let res = request(&app, "POST", "/todos", Some(json!({ "content": "first" }))).await;
    let first = body_json(res).await;
    assert_eq!(first["todo_id"], 1);

    let res = request(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(res.status(), 204);

    let res = request(&app, "POST", "/todos", Some(json!({ "content": "second" }))).await;
    let second = body_json(res).await;
    assert_eq!(second["todo_id"], 2);
}

#[tokio::test]
async fn update_keeps_content_when_only_completed_sent() {
    let app = app().await;

    let res = request(&app, "POST", "/todos", Some(json!({ "content": "walk dog" }))).await;
    assert_eq!(res.status(), 201);

    let res = request(&app, "PUT", "/todos/1", Some(json!({ "content": "walk the dog" }))).await;
    let body = body_json(res).await;
    assert_eq!(body, json!({ "todo_id": 1, "content": "walk the dog", "completed": false }));
}

async fn request(app: &Router, method: &str, path: &str, body: Option<serde_json::Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> serde_json::Value {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
