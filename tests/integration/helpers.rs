//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use societyhub_core::config::AppConfig;
use societyhub_realtime::hub::NotificationHub;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Live feed hub, exposed so tests can subscribe before a request
    pub hub: Arc<NotificationHub>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = societyhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        societyhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let alert_repo = Arc::new(
            societyhub_database::repositories::alert::AlertRepository::new(db_pool.clone()),
        );
        let notification_repo = Arc::new(
            societyhub_database::repositories::notification::NotificationRepository::new(
                db_pool.clone(),
            ),
        );
        let visitor_repo = Arc::new(
            societyhub_database::repositories::visitor::VisitorRepository::new(db_pool.clone()),
        );

        let hub = Arc::new(NotificationHub::new(config.realtime.channel_buffer_size));

        let alert_service = Arc::new(societyhub_service::alert::service::AlertService::new(
            Arc::clone(&alert_repo),
        ));
        let notification_service = Arc::new(
            societyhub_service::notification::service::NotificationService::new(
                Arc::clone(&notification_repo),
                Arc::clone(&visitor_repo),
                Arc::clone(&hub),
                config.realtime.notifications.history_limit,
            ),
        );

        let app_state = societyhub_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            hub: Arc::clone(&hub),
            alert_repo,
            notification_repo,
            visitor_repo,
            alert_service,
            notification_service,
        };

        let router = societyhub_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            hub,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        for table in ["notifications", "visitors", "alerts"] {
            sqlx::query(&format!("TRUNCATE {table} CASCADE"))
                .execute(pool)
                .await
                .expect("Failed to truncate table");
        }
    }

    /// Send a request with an optional JSON body, return status + JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, Some(body)).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request("GET", path, None).await
    }

    pub async fn put(&self, path: &str) -> (StatusCode, Value) {
        self.request("PUT", path, None).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("PATCH", path, Some(body)).await
    }
}
