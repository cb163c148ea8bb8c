use anyhow::Result;
use httpmock::prelude::*;
use rating_client::{App, ClientConfig, DuplicateNavigationPolicy, Navigation, Rating, ViewProps};
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("rating-client.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}

#[tokio::test]
async fn test_rate_then_list_from_config_file() -> Result<()> {
    let server = MockServer::start();
    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/reviews/")
            .header("x-api-key", "k-123")
            .json_body(json!({"rating": 5}));
        then.status(201)
            .json_body(json!({"id": 1, "rating": 5, "created_at": "2024-06-01T12:00:00"}));
    });
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/reviews/").header("x-api-key", "k-123");
        then.status(200).json_body(json!([
            {"id": 1, "rating": 5, "created_at": "2024-06-01T12:00:00"}
        ]));
    });

    let temp_dir = TempDir::new()?;
    std::env::set_var("RATING_CLIENT_IT_API_KEY", "k-123");
    let config_path = write_config(
        &temp_dir,
        &format!(
            r#"
base_url = "{}"

[headers]
X-Api-Key = "${{RATING_CLIENT_IT_API_KEY}}"
"#,
            server.base_url()
        ),
    )?;
    let config = ClientConfig::from_file(&config_path)?;
    let mut app = App::from_config(&config)?;

    let page = app
        .open(
            "/",
            ViewProps {
                rating: Some(Rating::from(5)),
            },
        )
        .await?;
    assert_eq!(page.route, "home");
    assert_eq!(page.navigation, Navigation::Mounted);
    assert!(!page.request_failed);
    assert_eq!(
        page.output,
        "Thanks for your feedback! ★★★★★ (5) saved as review #1"
    );

    let page = app.open("/reviews", ViewProps::default()).await?;
    assert_eq!(page.route, "reviews");
    assert_eq!(page.output, "Reviews (1)\n#1   ★★★★★ (5)  2024-06-01 12:00");

    post_mock.assert_hits(1);
    get_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_reopening_reviews_refetches() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/reviews/");
        then.status(200).json_body(json!([]));
    });

    let config = ClientConfig {
        base_url: server.base_url(),
        ..ClientConfig::default()
    };
    let mut app = App::from_config(&config)?;

    let first = app.open("/reviews", ViewProps::default()).await?;
    let second = app.open("/reviews", ViewProps::default()).await?;

    assert_eq!(first.navigation, Navigation::Mounted);
    assert_eq!(second.navigation, Navigation::Reloaded);
    assert_eq!(second.output, "No reviews yet.");
    assert_eq!(app.router().current().unwrap().mounts, 2);
    get_mock.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_ignore_policy_keeps_current_view() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/reviews/");
        then.status(200).json_body(json!([]));
    });

    let config = ClientConfig {
        base_url: server.base_url(),
        duplicate_navigation: DuplicateNavigationPolicy::Ignore,
        ..ClientConfig::default()
    };
    let mut app = App::from_config(&config)?;

    app.open("/reviews", ViewProps::default()).await?;
    let again = app.open("/reviews/", ViewProps::default()).await?;

    assert_eq!(again.navigation, Navigation::Unchanged);
    assert_eq!(again.output, "No reviews yet.");
    get_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_failed_request_is_rendered_not_raised() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/reviews/");
        then.status(500);
    });

    let config = ClientConfig {
        base_url: server.base_url(),
        ..ClientConfig::default()
    };
    let mut app = App::from_config(&config)?;

    let page = app.open("/reviews", ViewProps::default()).await?;

    assert!(page.request_failed);
    assert_eq!(page.output, "❌ Failed to fetch reviews");
    Ok(())
}

#[tokio::test]
async fn test_unknown_path() -> Result<()> {
    let mut app = App::from_config(&ClientConfig::default())?;

    let err = app.open("/settings", ViewProps::default()).await.unwrap_err();

    assert_eq!(err.to_string(), "No route matches path: /settings");
    assert!(app.router().current().is_none());
    Ok(())
}

#[tokio::test]
async fn test_home_without_rating_makes_no_request() -> Result<()> {
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.path_contains("/reviews");
        then.status(200).json_body(json!({}));
    });

    let config = ClientConfig {
        base_url: server.base_url(),
        ..ClientConfig::default()
    };
    let mut app = App::from_config(&config)?;
    let page = app.open("/", ViewProps::default()).await?;

    assert!(page.output.starts_with("How would you rate us?"));
    any_mock.assert_hits(0);
    Ok(())
}
