//! Integration tests for the feed service.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_seed(true).await
    }

    async fn with_seed(seed_posts: bool) -> Self {
        let config = Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            seed_posts,
            page_url: "http://feed.test/".to_string(),
        };

        let app = create_router(AppState::new(&config));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn login(&self, email: &str) -> Value {
        self.client
            .post(self.url("/api/session/login"))
            .json(&json!({ "email": email, "password": "pw" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn feed(&self) -> Value {
        let resp = self
            .client
            .get(self.url("/api/feed"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_feed_requires_login() {
    let fixture = TestFixture::new().await;

    for path in ["/api/feed", "/api/search?q=x", "/api/feed/revision"] {
        let resp = fixture.client.get(fixture.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 401, "{}", path);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    let resp = fixture
        .client
        .post(fixture.url("/api/posts"))
        .json(&json!({ "text": "sneaky" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_login_derives_display_name() {
    let fixture = TestFixture::new().await;

    let body = fixture.login("demo@x.com").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "demo");
    assert_eq!(body["data"]["email"], "demo@x.com");

    let session: Value = fixture
        .client
        .get(fixture.url("/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(session["data"]["name"], "demo");
}

#[tokio::test]
async fn test_login_rejects_missing_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/session/login"))
        .json(&json!({ "email": "demo@x.com", "password": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Please enter email and password.");

    let resp = fixture
        .client
        .get(fixture.url("/api/feed"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_login_accepts_whitespace_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/session/login"))
        .json(&json!({ "email": "a@b", "password": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "a");

    let feed = fixture.feed().await;
    assert_eq!(feed["data"]["welcome"], "Welcome, a!");
}

#[tokio::test]
async fn test_signup_does_not_log_in() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/session/signup"))
        .json(&json!({ "name": "Ali", "email": "ali@x.com", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["data"]["message"],
        "Account for Ali created (UI only). Please log in."
    );
    assert_eq!(body["data"]["loginPrefill"]["email"], "ali@x.com");

    let session: Value = fixture
        .client
        .get(fixture.url("/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(session["data"].is_null());
}

#[tokio::test]
async fn test_seed_feed_newest_first() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let body = fixture.feed().await;
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["author"], "Ali");
    assert_eq!(posts[1]["author"], "Demo User");
    assert_eq!(posts[0]["image"]["src"], "https://picsum.photos/400/200");
    assert_eq!(posts[1]["comments"]["collapsed"], true);
    assert_eq!(body["data"]["welcome"], "Welcome, demo!");
}

#[tokio::test]
async fn test_publish_and_validation() {
    let fixture = TestFixture::with_seed(false).await;
    fixture.login("demo@x.com").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/posts"))
        .json(&json!({ "text": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["message"], "Post content cannot be empty!");
    assert_eq!(body["revisionId"], 0);

    let resp = fixture
        .client
        .post(fixture.url("/api/posts"))
        .json(&json!({ "text": "hello feed", "imageUrl": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["revisionId"], 1);
    let post = &body["data"]["posts"][0];
    assert_eq!(post["text"], "hello feed");
    assert_eq!(post["author"], "demo");
    assert_eq!(post["likeButton"]["count"], 0);
    assert_eq!(post["likeButton"]["liked"], false);
    assert!(post.get("image").is_none());
    assert_eq!(post["commentToggle"]["count"], 0);
}

#[tokio::test]
async fn test_like_toggle_round_trip() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let before = fixture.feed().await;
    let a = &before["data"]["posts"][1];
    let id = a["id"].as_i64().unwrap();

    let liked: Value = fixture
        .client
        .post(fixture.url(&format!("/api/posts/{}/like", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let card = &liked["data"]["posts"][1];
    assert_eq!(card["likeButton"]["liked"], true);
    assert_eq!(card["likeButton"]["count"], 3);
    assert_eq!(liked["data"]["posts"][0], before["data"]["posts"][0]);

    let unliked: Value = fixture
        .client
        .post(fixture.url(&format!("/api/posts/{}/like", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unliked["data"]["posts"][1], before["data"]["posts"][1]);

    let resp = fixture
        .client
        .post(fixture.url("/api/posts/12345/like"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_needs_confirmation() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let feed = fixture.feed().await;
    let id = feed["data"]["posts"][0]["id"].as_i64().unwrap();

    let declined: Value = fixture
        .client
        .delete(fixture.url(&format!("/api/posts/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(declined["data"]["deleted"], false);
    assert_eq!(declined["data"]["view"]["total"], 2);

    let confirmed: Value = fixture
        .client
        .delete(fixture.url(&format!("/api/posts/{}?confirm=true", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(confirmed["data"]["deleted"], true);
    let remaining = confirmed["data"]["view"]["posts"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["author"], "Demo User");
}

#[tokio::test]
async fn test_comments_append_in_order() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let feed = fixture.feed().await;
    let id = feed["data"]["posts"][1]["id"].as_i64().unwrap();

    for text in ["second", "   "] {
        fixture
            .client
            .post(fixture.url(&format!("/api/posts/{}/comments", id)))
            .json(&json!({ "text": text }))
            .send()
            .await
            .unwrap();
    }

    let feed = fixture.feed().await;
    let items = feed["data"]["posts"][1]["comments"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "Nice work on the app!");
    assert_eq!(items[1]["text"], "second");
    assert_eq!(items[1]["author"], "demo");
    assert_eq!(
        feed["data"]["posts"][1]["commentToggle"]["label"],
        "💬 Comment (2)"
    );
}

#[tokio::test]
async fn test_search_filters_without_mutating() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/search?q=WELCOME"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["filter"], "WELCOME");
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["author"], "Demo User");
    assert!(body["data"].get("view").is_none());

    let body: Value = fixture
        .client
        .get(fixture.url("/api/feed?q=coding"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["filter"], "coding");

    let all = fixture.feed().await;
    assert_eq!(all["data"]["total"], 2);
    assert_eq!(all["revisionId"], 0);
}

#[tokio::test]
async fn test_share_native_and_fallback() {
    let fixture = TestFixture::new().await;
    fixture.login("demo@x.com").await;

    let feed = fixture.feed().await;
    let id = feed["data"]["posts"][1]["id"].as_i64().unwrap();
    let url = fixture.url(&format!("/api/posts/{}/share", id));

    let native: Value = fixture
        .client
        .post(&url)
        .json(&json!({ "nativeShare": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(native["data"]["kind"], "native");
    assert_eq!(native["data"]["title"], "Check out this post!");
    assert_eq!(native["data"]["url"], "http://feed.test/");

    let fallback: Value = fixture
        .client
        .post(&url)
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fallback["data"]["kind"], "fallback");
    assert_eq!(
        fallback["data"]["message"],
        "Sharing not supported in this browser. Post content: \"Welcome to the Mini Social App! This is my first post.\""
    );
}

#[tokio::test]
async fn test_logout_keeps_posts() {
    let fixture = TestFixture::with_seed(false).await;
    fixture.login("demo@x.com").await;

    fixture
        .client
        .post(fixture.url("/api/posts"))
        .json(&json!({ "text": "still here" }))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .client
        .post(fixture.url("/api/session/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url("/api/feed"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    fixture.login("other@x.com").await;
    let feed = fixture.feed().await;
    assert_eq!(feed["data"]["total"], 1);
    assert_eq!(feed["data"]["posts"][0]["author"], "demo");
    assert_eq!(feed["data"]["welcome"], "Welcome, other!");
}
