//! # Chapter 1: Requests
//!
//! Shape what goes out.
//!
//! ## Request Options
//!
//! [`RequestOptions`](crate::RequestOptions) is what a call site provides.
//! Everything is optional:
//!
//! ```ignore
//! let options = RequestOptions::new()
//!     .header("X-Request-Id", "42")
//!     .credentials(Credentials::Include);
//!
//! client.fetch("/users", options).await?;
//! ```
//!
//! The method defaults to `GET`. The URL is always `root_url() + path`, and
//! the root URL is read again for every call.
//!
//! ## Verb Helpers
//!
//! | Method | Body | `content-type` |
//! |--------|------|----------------|
//! | `get`, `post`, `put`, `patch`, `del` | none | not set |
//! | `post_json`, `put_json`, `patch_json`, `del_json` | JSON | `application/json` |
//!
//! ```ignore
//! #[derive(Serialize)]
//! struct NewUser<'a> {
//!     name: &'a str,
//! }
//!
//! client.post_json("/users", &NewUser { name: "Ada" }, RequestOptions::new()).await?;
//! ```
//!
//! The helper's verb always wins over a method set in the options. A body
//! that fails to serialize rejects with
//! [`FetchError::Body`](crate::FetchError::Body) before anything is sent.
//!
//! ## Path in the Options
//!
//! [`Client::send`](crate::Client::send) reads the path from the options:
//!
//! ```ignore
//! client.send(RequestOptions::new().url("/health")).await?;
//! ```
//!
//! ## Root URL
//!
//! ```ignore
//! use sofetch::RootUrl;
//!
//! // Fixed
//! Client::builder().root_url("https://api.example.com");
//!
//! // Environment, read on every call
//! Client::builder().root_url(RootUrl::from_env("API_URL", "http://localhost:8080"));
//!
//! // Anything else
//! Client::builder().root_url_fn(|| current_tenant().base_url());
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Responses][super::chapter_2] - Envelopes, bodies and errors
