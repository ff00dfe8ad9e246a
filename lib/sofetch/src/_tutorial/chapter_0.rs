//! # Chapter 0: Getting Started
//!
//! Your first sofetch call in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Build a [`Client`](crate::Client) with a root URL
//! - Make a GET request
//! - Read the response envelope
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sofetch = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Call
//!
//! ```ignore
//! use sofetch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FetchError> {
//!     let client: Client = Client::builder()
//!         .root_url("https://api.example.com")
//!         .build();
//!
//!     let envelope = client.get("/users/42", RequestOptions::new()).await?;
//!     println!("{} {:?}", envelope.status(), envelope.json());
//!     Ok(())
//! }
//! ```
//!
//! `Client` without type parameters decodes JSON into `serde_json::Value`.
//!
//! ## What Happens During a Call
//!
//! ```text
//! build descriptor        root_url() + path, method, headers, body
//!   → request interceptors   in the order they were added
//!   → transport              hyper + rustls by default
//!   → parse                  JSON when content-type says so, text otherwise
//!   → response interceptors  in the order they were added
//!   → decide                 Ok(envelope) or Err(FetchError::Status(envelope))
//! ```
//!
//! Each step is awaited before the next one starts.
//!
//! ## Next Steps
//!
//! - [Chapter 1: Requests][super::chapter_1] - Options, verbs, JSON bodies
