#![allow(dead_code)]

use gus_server::config::Config;
use gus_server::protocol::GoResponse;
use gus_server::signing::Signer;
use serde_json::Value;
use tokio::net::TcpListener;

pub const SECRET: &str = "test-secret";

/// A running server on an ephemeral port.
pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub signer: Signer,
}

impl TestServer {
    /// Two-player server: no opponent replies.
    pub async fn start() -> Self {
        Self::start_with(Config {
            secret: Some(SECRET.to_string()),
            opponent: false,
            ..Config::default()
        })
        .await
    }

    pub async fn start_with(config: Config) -> Self {
        let (router, state) = gus_server::build_router(&config);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestServer {
            base: format!("http://{addr}"),
            client: reqwest::Client::new(),
            signer: state.signer,
        }
    }

    pub async fn post_go(
        &self,
        x: i32,
        y: i32,
        session: &str,
        signature: &str,
        size: u8,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}/go", self.base))
            .form(&[
                ("x", x.to_string()),
                ("y", y.to_string()),
                ("session", session.to_string()),
                ("signature", signature.to_string()),
                ("size", size.to_string()),
            ])
            .send()
            .await
            .unwrap()
    }

    /// POST and decode an error body, returning the HTTP status alongside.
    pub async fn post_go_err(&self, x: i32, y: i32, session: &str, signature: &str) -> (u16, Value) {
        let resp = self.post_go(x, y, session, signature, 9).await;
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    pub async fn new_game(&self, size: u8) -> Game<'_> {
        let resp = self.post_go(-1, -1, "new", "", size).await;
        assert_eq!(resp.status(), 200);
        let last: GoResponse = resp.json().await.unwrap();
        Game { server: self, last }
    }

    /// Start from an arbitrary position, signed with the server key.
    pub fn game_from(&self, session: &str) -> Game<'_> {
        Game {
            server: self,
            last: GoResponse {
                session: session.to_string(),
                signature: self.signer.sign(session),
                status: 0,
                x: -1,
                y: -1,
            },
        }
    }
}

/// Client-side view of one game: always resubmits the last session it received.
pub struct Game<'a> {
    server: &'a TestServer,
    pub last: GoResponse,
}

impl Game<'_> {
    pub async fn play(&mut self, x: i32, y: i32) -> &GoResponse {
        let resp = self
            .server
            .post_go(x, y, &self.last.session, &self.last.signature, 9)
            .await;
        assert_eq!(resp.status(), 200);
        self.last = resp.json().await.unwrap();
        &self.last
    }

    pub async fn pass(&mut self) -> &GoResponse {
        self.play(-2, -2).await
    }

    /// The cells field, where the browser client reads it.
    pub fn cells(&self) -> &str {
        self.token(5)
    }

    /// Token `i` of the current session.
    pub fn token(&self, i: usize) -> &str {
        self.last.session.split(' ').nth(i).unwrap()
    }
}
