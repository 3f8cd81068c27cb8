use auth::AuthService;
use axum::{
    routing::{get, post, put},
    Router,
};
use corpus::DocumentStore;
use lawdesk_core::config::{Config, CorsConfig, SearchConfig};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod handlers;
pub mod models;

/// Shared by every request. Nothing in here is mutated after startup.
pub struct AppState {
    pub store: DocumentStore,
    pub auth: AuthService,
    pub search: SearchConfig,
}

impl AppState {
    pub fn new(store: DocumentStore, auth: AuthService, search: SearchConfig) -> Self {
        Self {
            store,
            auth,
            search,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DocumentStore::builtin(),
            AuthService::demo(),
            config.search.clone(),
        )
    }
}

pub fn create_app() -> Router {
    let config = Config::development();
    create_app_with_state(Arc::new(AppState::from_config(&config)), &config.cors)
}

pub fn create_app_with_state(state: Arc<AppState>, cors: &CorsConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/register", post(handlers::register))
        .route("/api/user/update", put(handlers::update_profile))
        .route("/api/laws", get(handlers::list_laws))
        .route("/api/laws/:law_id", get(handlers::get_law))
        .route("/api/search", post(handlers::search))
        .route("/api/query", post(handlers::query))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors.allow_any_origin {
        router.layer(CorsLayer::very_permissive())
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_for_health_endpoint() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_endpoint() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
    }

    #[tokio::test]
    async fn should_login_with_any_password() {
        let app = create_app();

        let response = app
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "user@example.com", "password": "whatever"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"token": "demo-token-for-user@example.com"})
        );
    }

    #[tokio::test]
    async fn should_reject_login_with_empty_email() {
        let app = create_app();

        let response = app
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"detail": "Email required"}));
    }

    #[tokio::test]
    async fn should_reject_login_without_password_field() {
        let app = create_app();

        let response = app
            .oneshot(post_json("/api/auth/login", json!({"email": "a@b.c"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let app = create_app();

        let request = Request::builder()
            .uri("/api/search")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_echo_registration() {
        let app = create_app();

        let response = app
            .oneshot(post_json(
                "/api/auth/register",
                json!({"email": "new@example.com", "password": "pw", "name": "Олег"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 123, "email": "new@example.com", "name": "Олег"})
        );
    }

    #[tokio::test]
    async fn should_return_null_name_when_registering_without_name() {
        let app = create_app();

        let response = app
            .oneshot(post_json(
                "/api/auth/register",
                json!({"email": "new@example.com", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(body_json(response).await["name"], Value::Null);
    }

    fn put_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("PUT")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_echo_profile_update() {
        let app = create_app();

        let response = app
            .oneshot(put_json(
                "/api/user/update",
                json!({"name": "Иван Петров", "photo": "https://example.com/p.jpg"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "user": {
                    "name": "Иван Петров",
                    "status": "Базовый",
                    "requests_used": 15,
                    "requests_limit": 100,
                    "photo": "https://example.com/p.jpg"
                }
            })
        );
    }

    #[tokio::test]
    async fn should_reject_profile_update_with_empty_name() {
        let app = create_app();

        let response = app
            .oneshot(put_json("/api/user/update", json!({"name": "", "photo": null})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"detail": "Name required"}));
    }

    #[tokio::test]
    async fn should_list_laws() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/api/laws").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let laws = json.as_array().unwrap();
        assert_eq!(laws.len(), 3);
        assert_eq!(
            laws[0],
            json!({"id": 1, "title": "Закон о труде", "text": "Текст закона о труде..."})
        );
    }

    #[tokio::test]
    async fn should_get_law_by_id() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/api/laws/2").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["title"], "Инструкция по безопасности");
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_law() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/api/laws/99").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Not found"}));
    }

    #[tokio::test]
    async fn should_return_400_for_non_numeric_law_id() {
        let app = create_app();

        let response = app
            .oneshot(Request::builder().uri("/api/laws/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_search_with_default_top_k() {
        let app = create_app();

        let response = app
            .oneshot(post_json("/api/search", json!({"query": "закон"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ranked: Vec<(i64, f64)> = json["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|hit| (hit["id"].as_i64().unwrap(), hit["score"].as_f64().unwrap()))
            .collect();
        assert_eq!(ranked, vec![(1, 1.0), (3, 1.0), (2, 0.0)]);
    }

    #[tokio::test]
    async fn should_apply_configured_default_top_k() {
        let state = AppState::new(
            DocumentStore::builtin(),
            AuthService::demo(),
            SearchConfig { default_top_k: 1 },
        );
        let app = create_app_with_state(Arc::new(state), &CorsConfig::default());

        let response = app
            .oneshot(post_json("/api/search", json!({"query": "данных"})))
            .await
            .unwrap();

        let json = body_json(response).await;
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], 3);
    }

    #[tokio::test]
    async fn should_answer_query_with_matching_sources() {
        let app = create_app();

        let response = app
            .oneshot(post_json("/api/query", json!({"query": "ЗАКОН"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<i64> = json["sources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|source| source["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(json["answer"].as_str().unwrap().ends_with("найдено документов: 2."));
    }

    #[tokio::test]
    async fn should_allow_any_origin_by_default() {
        let app = create_app();

        let request = Request::builder()
            .uri("/api/laws")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn should_allow_any_method_and_header_on_preflight() {
        let app = create_app();

        let request = Request::builder()
            .uri("/api/laws")
            .method("OPTIONS")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "DELETE")
            .header("access-control-request-headers", "x-custom")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
        assert!(headers
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("DELETE"));
        assert!(headers
            .get("access-control-allow-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .to_ascii_lowercase()
            .contains("x-custom"));
        assert_eq!(
            headers.get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn should_omit_cors_headers_when_disabled() {
        let config = Config::development();
        let state = Arc::new(AppState::from_config(&config));
        let app = create_app_with_state(
            state,
            &CorsConfig {
                allow_any_origin: false,
            },
        );

        let request = Request::builder()
            .uri("/api/laws")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
