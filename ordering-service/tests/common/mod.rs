use ordering_service::config::{DatabaseConfig, OrderingConfig};
use ordering_service::services::MongoDb;
use ordering_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        Self::spawn_against(&url).await
    }

    /// Spawn the app against an arbitrary store URI, e.g. an unreachable one.
    pub async fn spawn_against(url: &str) -> Self {
        let db_name = format!("ordering_test_{}", Uuid::new_v4());

        let config = OrderingConfig {
            port: 0, // Random port for testing
            database: DatabaseConfig {
                url: url.to_string(),
                name: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to come up by polling the liveness endpoint
        let client = reqwest::Client::new();
        let liveness_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&liveness_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
