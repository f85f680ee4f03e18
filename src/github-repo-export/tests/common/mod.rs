//! Shared helpers for the integration tests.

#![allow(dead_code)]

use github_repo_export::{build_client, Settings};
use octocrab::Octocrab;
use serde_json::{json, Value};
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/search/repositories";

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// The two-item page used by most tests.
pub fn page_one() -> Value {
    let contents = std::fs::read_to_string(fixtures_root().join("search/page_one.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

/// A page of `count` generated items, named after the page.
pub fn generated_page(page: u32, count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": page as usize * 1000 + i,
                "name": format!("p{page}-r{i}"),
                "full_name": format!("octo/p{page}-r{i}"),
                "description": null,
                "stargazers_count": i,
                "forks_count": 0,
                "language": "Go",
                "topics": [],
                "html_url": format!("https://github.com/octo/p{page}-r{i}")
            })
        })
        .collect();
    json!({ "total_count": 1000, "incomplete_results": false, "items": items })
}

pub fn settings_for(server: &MockServer) -> Settings {
    Settings {
        api_base_url: server.uri(),
        timeout_secs: 5,
        ..Settings::default()
    }
}

pub fn client_for(server: &MockServer) -> Octocrab {
    build_client("test-token", &settings_for(server)).unwrap()
}

/// Mounts a page response that must be requested exactly `expected` times.
pub async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }))
}
