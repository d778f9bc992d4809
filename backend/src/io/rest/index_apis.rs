//! Full page endpoint.

use axum::{
    extract::{Query, State},
    response::Html,
};
use shared::EventQuery;
use tracing::info;

use crate::domain::LogDate;
use crate::io::html::render_index;
use crate::AppState;

/// Render the page shell for any method. A missing or malformed date falls back to today.
pub async fn index_page(
    State(state): State<AppState>,
    query: Option<Query<EventQuery>>,
) -> Html<String> {
    let raw_date = query.and_then(|Query(q)| q.date);
    info!("GET / - date: {:?}", raw_date);

    let date = raw_date
        .as_deref()
        .and_then(LogDate::parse)
        .unwrap_or_else(|| state.event_table_service.today());
    let view = state.event_table_service.index_view(date);

    Html(render_index(&view))
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::domain::LogDate;
    use crate::storage::MemoryEventRepository;
    use crate::{create_router, initialize_with_storage};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_page(uri: &str) -> (StatusCode, String) {
        page(Method::GET, uri).await
    }

    async fn page(method: Method, uri: &str) -> (StatusCode, String) {
        let config = AppConfig::default();
        let state = initialize_with_storage(&config, Arc::new(MemoryEventRepository::new()));
        let response = create_router(state)
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_with_date() {
        let (status, body) = get_page("/?date=01012024").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Liquid Input/Output on 1 Jan 2024"));
        assert!(body.contains("hx-get=\"/intake?date=01012024\""));
    }

    #[tokio::test]
    async fn test_index_answers_any_method() {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, body) = page(method.clone(), "/?date=01012024").await;
            assert_eq!(status, StatusCode::OK, "method {}", method);
            assert!(body.contains("Liquid Input/Output on 1 Jan 2024"));
        }
    }

    #[tokio::test]
    async fn test_index_defaults_to_today() {
        let today = LogDate::today(&AppConfig::default().display_offset);
        for uri in ["/", "/?date=garbage", "/?date=31022024"] {
            let (status, body) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK, "uri {}", uri);
            // Around midnight the request may see the next day; accept either key
            let tomorrow = LogDate::new(today.date().succ_opt().unwrap());
            assert!(
                body.contains(&format!("/output?date={}", today.key()))
                    || body.contains(&format!("/output?date={}", tomorrow.key())),
                "uri {}",
                uri
            );
        }
    }
}
