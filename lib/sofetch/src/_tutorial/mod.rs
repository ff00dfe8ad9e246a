//! # Tutorial: HTTP Calls with Interceptors
//!
//! Learn to build an HTTP client whose cross-cutting behavior lives in
//! interceptors, step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first client and call
//! 2. [Requests][chapter_1] - Options, verbs, JSON bodies
//! 3. [Responses][chapter_2] - Envelopes, bodies and errors
//! 4. [Interceptors][chapter_3] - Auth, rewriting, logging, custom interceptors
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
