use super::*;
use axum::{routing::get, Json, Router};
use tokio::net::TcpListener;

use crate::config::Settings;

fn genre(name: &str) -> Genre {
    Genre {
        id: None,
        name: name.to_string(),
        description: None,
        cover: None,
    }
}

fn describe(panel: &ContentPanel<Genre>) -> String {
    panel.render(|g| format!("item:{}", g.name), |empty| format!("empty:{empty}"))
}

#[test]
fn renders_empty_state_before_anything_arrives() {
    let panel = ContentPanel::<Genre>::new(Face::Genres);
    assert!(!panel.is_loaded());
    assert_eq!(describe(&panel), "empty:No genres yet.");
}

#[test]
fn renders_only_the_first_item() {
    let mut panel = ContentPanel::new(Face::Genres);
    panel.apply(vec![genre("Jazz"), genre("Rock")]);
    assert!(panel.is_loaded());
    assert_eq!(panel.items().len(), 2);
    assert_eq!(describe(&panel), "item:Jazz");
}

#[test]
fn empty_listing_renders_designated_message_not_an_error() {
    let mut panel = ContentPanel::<Genre>::new(Face::Genres);
    panel.apply(Vec::new());
    assert!(panel.is_loaded());
    assert_eq!(describe(&panel), "empty:No genres yet.");
}

#[test]
fn panels_route_content_to_matching_face_only() {
    let mut panels = Panels::default();
    panels.apply(FaceContent::Genres(vec![genre("Soul")]));

    assert!(panels.is_loaded(Face::Genres));
    assert!(!panels.is_loaded(Face::Live));
    assert_eq!(panels.genres.first().map(|g| g.name.as_str()), Some("Soul"));
    assert!(panels.shows.first().is_none());
    assert_eq!(panels.live.endpoint(), "/api/live-channels");
    assert_eq!(panels.latest_video.title(), "Latest Music Video");
}

#[tokio::test]
async fn failed_fetch_renders_identically_to_empty_listing() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        "/api/genres",
        get(|| async { Json(serde_json::json!({ "items": [] })) }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let online = AvangClient::new(&Settings::default().with_backend_url(&format!("http://{addr}")));

    let dead = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let dead_addr = dead.local_addr().expect("addr");
    drop(dead);
    let offline =
        AvangClient::new(&Settings::default().with_backend_url(&format!("http://{dead_addr}")));

    let mut empty = ContentPanel::<Genre>::new(Face::Genres);
    empty.load(&online).await;
    let mut failed = ContentPanel::<Genre>::new(Face::Genres);
    failed.load(&offline).await;

    assert!(empty.is_loaded() && failed.is_loaded());
    assert_eq!(describe(&empty), describe(&failed));
    assert_eq!(describe(&failed), "empty:No genres yet.");
}
