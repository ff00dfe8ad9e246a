//! GitHub API Demo
//!
//! Demonstrates a small typed API wrapper built on sofetch interceptors.
//!
//! ```text
//! GITHUB_TOKEN=... RUST_LOG=debug cargo run -p github-api-demo
//! ```

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use serde::de::DeserializeOwned;
use sofetch::middleware::SetHeader;
use sofetch::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Data Types
// ============================================================================

/// A GitHub contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u32,
}

/// A GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
}

/// Request to create a GitHub issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssue {
    pub title: String,
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// A GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u32,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
}

// ============================================================================
// API wrapper
// ============================================================================

const USER_AGENT: &str = "sofetch-github-demo/0.1.0";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Thin typed wrapper over a sofetch client.
#[derive(Debug, Clone)]
pub struct GitHub {
    client: Client,
}

impl GitHub {
    /// Client for `root_url` (a fixed URL or an environment-backed accessor).
    pub fn new(root_url: impl Into<RootUrl>) -> Self {
        let client = Client::builder()
            .root_url(root_url)
            .request_interceptor(SetHeader::overriding("User-Agent", USER_AGENT))
            .request_interceptor(SetHeader::if_absent("Accept", GITHUB_JSON))
            .with_bearer_auth_fn(|| std::env::var("GITHUB_TOKEN").ok())
            .with_logging()
            .with_metrics()
            .build();
        Self { client }
    }

    /// List contributors for a repository.
    ///
    /// GitHub answers `204 No Content` for an empty repository.
    pub async fn contributors(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Contributor>, BoxError> {
        let envelope = self
            .client
            .get(
                &format!("/repos/{owner}/{repo}/contributors"),
                RequestOptions::new(),
            )
            .await?;
        if envelope.status() == 204 {
            return Ok(Vec::new());
        }
        decode(envelope)
    }

    /// Get repository information.
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository, BoxError> {
        let envelope = self
            .client
            .get(&format!("/repos/{owner}/{repo}"), RequestOptions::new())
            .await?;
        decode(envelope)
    }

    /// List issues in the given state.
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        per_page: u32,
    ) -> Result<Vec<Issue>, BoxError> {
        let envelope = self
            .client
            .get(
                &format!("/repos/{owner}/{repo}/issues?state={state}&per_page={per_page}"),
                RequestOptions::new(),
            )
            .await?;
        decode(envelope)
    }

    /// Create an issue. Requires `GITHUB_TOKEN`.
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &CreateIssue,
    ) -> Result<Issue, BoxError> {
        let envelope = self
            .client
            .post_json(
                &format!("/repos/{owner}/{repo}/issues"),
                issue,
                RequestOptions::new(),
            )
            .await?;
        decode(envelope)
    }
}

fn decode<T: DeserializeOwned>(envelope: Envelope) -> Result<T, BoxError> {
    match envelope.into_body() {
        Body::Json(value) => Ok(serde_json::from_value(value)?),
        Body::Text(text) => Err(format!("expected a JSON body, got {text:?}").into()),
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let root_url = RootUrl::from_env("GITHUB_API_URL", "https://api.github.com");
    let github = GitHub::new(root_url);
    info!(client = ?github, "GitHub client created");

    let repo = github.get_repo("rust-lang", "rust").await?;
    println!(
        "{}: {} stars, {} forks",
        repo.full_name, repo.stargazers_count, repo.forks_count
    );

    let issues = github.list_issues("rust-lang", "rust", "open", 5).await?;
    for issue in issues {
        println!("#{} {}", issue.number, issue.title);
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================
