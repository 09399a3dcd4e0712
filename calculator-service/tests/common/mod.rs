//! Test helper module for calculator-service integration tests.

#![allow(dead_code)]

use calculator_service::config::CalculatorConfig;
use calculator_service::startup::Application;
use service_core::config::Config;
use tokio::sync::oneshot;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(CalculatorConfig::default()).await
    }

    pub async fn spawn_with(mut config: CalculatorConfig) -> Self {
        config.common = Config {
            port: 0, // Random port
            ..Config::default()
        };
        config.service_name = "calculator-service-test".to_string();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            app.run_with_shutdown(async move {
                rx.await.ok();
            })
            .await
            .ok();
        });

        let client = reqwest::Client::new();
        let address = format!("http://127.0.0.1:{}", port);

        // Wait for the server to accept connections
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
            shutdown: Some(tx),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a raw JSON body to an operation route.
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
