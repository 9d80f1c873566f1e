//! Shared setup for HTTP tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn create_test_config(url: String) -> community::Config {
    community::Config {
        server: community::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8001,
        },
        database: community::config::DatabaseConfig {
            url,
            max_connections: 2,
        },
        jwt: community::config::JwtConfig {
            secret: JWT_SECRET.to_string(),
            expiration_days: 1,
        },
        observability: community::config::ObservabilityConfig::default(),
        leaderboard: community::config::LeaderboardConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: community::AppState,
    _dir: TempDir,
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let config = create_test_config(url.to_owned());
    let state = community::db::connect(&url, config.database.max_connections).await?;
    let state = community::AppState::new(config, state);

    Ok(TestApp {
        router: community::routes::router(state.clone()),
        state,
        _dir: dir,
    })
}

impl TestApp {
    /// Creates a user through the write pool and returns (id, bearer token).
    pub async fn create_user(&self, username: &str) -> anyhow::Result<(String, String)> {
        let user = community_user::Command(self.state.feed_command.0.clone())
            .create(community_user::CreateInput {
                username: username.to_owned(),
            })
            .await?;
        let token = community::auth::generate_token(&user.id, JWT_SECRET, 1)?;

        Ok((user.id, token))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;

        self.send(request).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        self.send(request.body(Body::from(body.to_string()))?).await
    }

    async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok((status, body))
    }
}
