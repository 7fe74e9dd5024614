//! Typed client for the RuangHijau admin REST surface (`/admin`) and the
//! feedback/sentiment API (`/api/feedback`).
//!
//! The browser dashboard (`admin-wasm`) talks to the same endpoints through
//! its own fetch layer; this crate is the native mirror used by `admin-cli`
//! and by scripts.

pub mod error;
pub mod http_client;
pub mod models;

pub use error::AdminClientError;
pub use http_client::AdminClient;
pub use models::*;
