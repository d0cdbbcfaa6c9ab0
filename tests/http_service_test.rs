use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use gridconnect::error::ServiceError;
use gridconnect::puzzles::sample_groups;
use gridconnect::service::{GroupCheck, HttpPuzzleService, PuzzleService};

fn sample_words() -> Vec<String> {
    sample_groups()
        .iter()
        .flat_map(|group| group.words().iter().cloned())
        .collect()
}

async fn today() -> Json<Value> {
    Json(json!({ "words": sample_words() }))
}

async fn check(Json(body): Json<Value>) -> Json<Value> {
    let selection: Vec<String> = serde_json::from_value(body["selection"].clone()).unwrap();
    let found = sample_groups()
        .into_iter()
        .find(|group| group.matches(&selection));

    match found {
        Some(group) => Json(json!({ "isCorrect": true, "group": group })),
        None => Json(json!({ "isCorrect": false })),
    }
}

async fn start_server(app: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

async fn puzzle_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    start_server(
        Router::new()
            .route("/api/today", get(today))
            .route("/api/check", post(check)),
    )
    .await
}

fn client(addr: SocketAddr) -> HttpPuzzleService {
    HttpPuzzleService::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_fetch_today() {
    let (addr, _handle) = puzzle_server().await;

    let puzzle = client(addr).fetch_today().await.unwrap();
    assert_eq!(puzzle.words(), sample_words().as_slice());
}

#[tokio::test]
async fn test_check_correct_group() {
    let (addr, _handle) = puzzle_server().await;
    let fish = sample_groups()[0].clone();
    let mut guess = fish.words().clone();
    guess.reverse();

    let verdict = client(addr).check_group(&guess).await.unwrap();
    assert_eq!(verdict, GroupCheck::Correct(fish));
}

#[tokio::test]
async fn test_check_incorrect_group() {
    let (addr, _handle) = puzzle_server().await;
    let groups = sample_groups();
    let guess = [
        groups[0].words()[0].clone(),
        groups[0].words()[1].clone(),
        groups[0].words()[2].clone(),
        groups[1].words()[0].clone(),
    ];

    let verdict = client(addr).check_group(&guess).await.unwrap();
    assert_eq!(verdict, GroupCheck::Incorrect);
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let (addr, _handle) = start_server(Router::new().route(
        "/api/today",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    ))
    .await;

    let err = client(addr).fetch_today().await.unwrap_err();
    assert!(matches!(err, ServiceError::Unavailable(_)), "{err:?}");
}

#[tokio::test]
async fn test_short_word_list_is_invalid() {
    let (addr, _handle) = start_server(Router::new().route(
        "/api/today",
        get(|| async { Json(json!({ "words": ["BASS", "PIKE"] })) }),
    ))
    .await;

    let err = client(addr).fetch_today().await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn test_correct_without_group_is_invalid() {
    let (addr, _handle) = start_server(Router::new().route(
        "/api/check",
        post(|| async { Json(json!({ "isCorrect": true })) }),
    ))
    .await;
    let guess = sample_groups()[0].words().clone();

    let err = client(addr).check_group(&guess).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr).fetch_today().await.unwrap_err();
    assert!(matches!(err, ServiceError::Unavailable(_)), "{err:?}");
}
