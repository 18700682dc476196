use brokerage_api::config::ApiConfig;
use brokerage_api::services::DocumentStore;
use brokerage_api::startup::Application;

pub struct TestApp {
    pub address: String,
    #[allow(dead_code)]
    pub store: DocumentStore,
}

impl TestApp {
    /// Spawn the app with no database configured (degraded mode).
    pub async fn spawn() -> Self {
        let config = ApiConfig {
            port: 0,
            database_url: None,
            database_name: None,
        };
        Self::spawn_with(config).await
    }

    /// Spawn the app against a specific configuration. Used by tests that
    /// talk to a real MongoDB instance.
    pub async fn spawn_with(config: ApiConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            store,
        }
    }
}
