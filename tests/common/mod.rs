use crewtrack::config::JwtConfig;
use crewtrack::db::postgres_service::PostgresService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub jwt: JwtConfig,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // single connection so every query in a test sees the same
        // in-memory database
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1).min_connections(1);

        let db = Arc::new(
            PostgresService::new(options)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            jwt: test_jwt_config(),
        }
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-32-chars-min!".to_string(),
        issuer: "crewtrack".to_string(),
        audience: "crewtrack".to_string(),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_register() -> Value {
        json!({
            "fullName": "Alice Example",
            "email": "a@x.com",
            "password": "pw123456"
        })
    }

    pub fn register_with_email(email: &str) -> Value {
        json!({
            "fullName": "Test User",
            "email": email,
            "password": "pw123456"
        })
    }

    pub fn login(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
