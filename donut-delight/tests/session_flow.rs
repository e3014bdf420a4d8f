// donut-delight/tests/session_flow.rs
// Page loads against an in-process catalog host and a file-backed session

use axum::{Json, Router, http::StatusCode, routing::get};
use donut_delight::commands::list::{ListAction, run};
use donut_delight::core::persisted::{ORDER_KEY, SELECTION_KEY, read_ids};
use donut_delight::pages::list::{CONGRATULATIONS, EMPTY_MESSAGE, ERROR_MESSAGE};
use donut_delight::{AppConfig, Commands, FileSessionStore, SessionStore, commands};
use donut_client::{ClientConfig, HttpCatalogSource, RetryPolicy};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn mock_donuts() -> Value {
    json!([
        { "id": 1, "name": "Pink heart", "price": 1.99, "imageName": "donut-1" },
        { "id": 2, "name": "The tiger", "price": 1.79, "imageName": "donut-2" },
        { "id": 3, "name": "Iced delight", "price": 1.89, "imageName": "donut-3" }
    ])
}

async fn donut_host() -> String {
    serve(Router::new().route("/donuts.json", get(|| async { Json(mock_donuts()) }))).await
}

/// One page load with a freshly opened session, like a browser reload
async fn page_load(base_url: &str, session_dir: &Path, action: ListAction) -> String {
    let source = HttpCatalogSource::from_config(&ClientConfig::new(base_url)).unwrap();
    let store = FileSessionStore::open(session_dir).unwrap();
    run(source, store, &RetryPolicy::none(), action).await.unwrap()
}

fn stored(session_dir: &Path, key: &str) -> Option<Vec<u64>> {
    read_ids(&FileSessionStore::open(session_dir).unwrap(), key).unwrap()
}

fn config(base_url: &str, session_dir: PathBuf) -> AppConfig {
    AppConfig {
        base_url: base_url.to_string(),
        catalog_path: "donuts.json".into(),
        timeout_secs: 5,
        max_retries: 0,
        session_dir,
        log_level: "warn".into(),
        log_json: false,
    }
}

#[tokio::test]
async fn test_order_survives_reload_while_chomping() {
    let base = donut_host().await;
    let session = TempDir::new().unwrap();

    page_load(&base, session.path(), ListAction::Chomp(2)).await;
    let order = stored(session.path(), ORDER_KEY).unwrap();

    for _ in 0..5 {
        page_load(&base, session.path(), ListAction::View).await;
        assert_eq!(stored(session.path(), ORDER_KEY).unwrap(), order);
    }
    assert_eq!(stored(session.path(), SELECTION_KEY), Some(vec![2]));
}

#[tokio::test]
async fn test_chomp_everything_then_reset() {
    let base = donut_host().await;
    let session = TempDir::new().unwrap();

    for id in [1, 2, 3] {
        page_load(&base, session.path(), ListAction::Chomp(id)).await;
    }
    let page = page_load(&base, session.path(), ListAction::View).await;
    assert!(page.contains(CONGRATULATIONS));
    assert!(page.contains("Total Price: £5.67"));

    let order = stored(session.path(), ORDER_KEY);
    let page = page_load(&base, session.path(), ListAction::Reset).await;
    assert!(page.contains("Total Price: £0.00"));
    assert!(!page.contains(CONGRATULATIONS));
    assert_eq!(stored(session.path(), ORDER_KEY), order);
}

#[tokio::test]
async fn test_catalog_change_forces_reshuffle() {
    let session = TempDir::new().unwrap();
    {
        let mut store = FileSessionStore::open(session.path()).unwrap();
        store.set(ORDER_KEY, "[3,1]").unwrap();
        store.set(SELECTION_KEY, "[1]").unwrap();
    }
    let base = donut_host().await;

    page_load(&base, session.path(), ListAction::View).await;
    let mut order = stored(session.path(), ORDER_KEY).unwrap();
    order.sort_unstable();
    assert_eq!(order, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_corrupt_session_values_recover() {
    let session = TempDir::new().unwrap();
    {
        let mut store = FileSessionStore::open(session.path()).unwrap();
        store.set(ORDER_KEY, "[[[").unwrap();
        store.set(SELECTION_KEY, "{}").unwrap();
    }
    let base = donut_host().await;

    let page = page_load(&base, session.path(), ListAction::View).await;
    assert!(page.contains("Total Price: £0.00"));
    assert!(stored(session.path(), ORDER_KEY).is_some());
    assert_eq!(stored(session.path(), SELECTION_KEY), Some(vec![]));
}

#[tokio::test]
async fn test_empty_catalog_shows_empty_state() {
    let base = serve(Router::new().route("/donuts.json", get(|| async { Json(json!([])) }))).await;
    let session = TempDir::new().unwrap();

    let page = page_load(&base, session.path(), ListAction::View).await;
    assert!(page.contains(EMPTY_MESSAGE));
    assert!(page.contains("Total Price: £0.00"));
    assert!(!page.contains(ERROR_MESSAGE));
}

#[tokio::test]
async fn test_server_error_shows_error_and_keeps_session() {
    let base = serve(Router::new().route(
        "/donuts.json",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let session = TempDir::new().unwrap();

    let page = page_load(&base, session.path(), ListAction::View).await;
    assert_eq!(page, ERROR_MESSAGE);
    assert!(stored(session.path(), ORDER_KEY).is_none());
}

#[tokio::test]
async fn test_execute_commands_end_to_end() {
    let base = donut_host().await;
    let session = TempDir::new().unwrap();
    let config = config(&base, session.path().join("s"));

    let page = commands::execute(&Commands::Home, &config).await.unwrap();
    assert!(page.contains("Welcome to Donut Delight!"));
    assert!(page.contains("Theme: (Blue) Pink"));

    commands::execute(&Commands::Theme { theme: Some(donut_delight::Theme::Pink) }, &config)
        .await
        .unwrap();
    let page = commands::execute(&Commands::Chomp { id: 1 }, &config).await.unwrap();
    assert!(page.contains("[List]"));
    assert!(page.contains("Theme: Blue (Pink)"));
    assert!(page.contains("\n== pink ="));
    assert!(page.contains("Chomped Pink heart!"));

    let page = commands::execute(&Commands::Open { path: "/company".into() }, &config)
        .await
        .unwrap();
    assert!(page.contains("Company Info Page"));
    assert!(!page.contains("Theme:"));
    assert!(page.contains("\n== blue ="));

    assert!(commands::execute(&Commands::Open { path: "/nope".into() }, &config).await.is_err());

    assert_eq!(
        commands::execute(&Commands::SessionEnd, &config).await.unwrap(),
        "Session ended."
    );
    assert_eq!(
        commands::execute(&Commands::SessionEnd, &config).await.unwrap(),
        "No active session."
    );
    let page = commands::execute(&Commands::List, &config).await.unwrap();
    assert!(page.contains("Total Price: £0.00"));
    assert!(page.contains("Theme: (Blue) Pink"));
}
