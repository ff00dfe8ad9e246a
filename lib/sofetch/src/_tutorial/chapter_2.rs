//! # Chapter 2: Responses
//!
//! Read what comes back.
//!
//! ## The Envelope
//!
//! Every response becomes an [`Envelope`](crate::Envelope):
//!
//! | Accessor | Description |
//! |----------|-------------|
//! | `status()` | HTTP status code |
//! | `headers()`, `header(name)` | Response headers (case-insensitive) |
//! | `body()` | [`Body::Json`](crate::Body::Json) or [`Body::Text`](crate::Body::Text) |
//! | `json()`, `text()` | Shortcuts into the body |
//! | `is_error()` | Whether the call rejects |
//! | `config()` | The request that produced it |
//!
//! ## Typed Bodies
//!
//! The client's first type parameter is the JSON target:
//!
//! ```ignore
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let client = Client::<User>::builder().root_url("https://api.example.com").build();
//! let envelope = client.get("/users/42", RequestOptions::new()).await?;
//!
//! match envelope.body() {
//!     Body::Json(user) => println!("{}", user.name),
//!     Body::Text(raw) => println!("not a user: {raw}"),
//! }
//! ```
//!
//! A body is decoded only when `content-type` contains `application/json`.
//! A JSON body that does not decode into `T` is kept as text: parsing never
//! fails a call.
//!
//! ## Errors
//!
//! Any status outside `200..300` flags the envelope as an error. Response
//! interceptors may change that flag; whatever it is at the end decides:
//!
//! ```ignore
//! match client.get("/users/0", RequestOptions::new()).await {
//!     Ok(envelope) => println!("found: {:?}", envelope.json()),
//!     Err(FetchError::Status(envelope)) => println!("HTTP {}", envelope.status()),
//!     Err(FetchError::Transport(err)) => println!("network: {err}"),
//!     Err(FetchError::Interceptor(err)) => println!("interceptor: {err}"),
//!     Err(FetchError::Body(err)) => println!("request body: {err}"),
//! }
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 3: Interceptors][super::chapter_3] - Auth, rewriting, logging, custom interceptors
