// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Mapwire Core
//!
//! Core types, models, and errors for the Mapwire SDK.
//!
//! This crate holds the I/O-free half of the SDK: everything a request
//! executor consumes or produces, and the argument types a data-call cursor
//! resolves. The `mapwire-client` crate builds the client, cursor, and
//! reqwest-backed executor on top of these.
//!
//! ## Key Types
//!
//! ### Wire Types
//! - [`ApiRequest`] - A fully resolved outbound request
//! - [`ApiResponse`] - Response metadata (status, headers)
//! - [`Payload`] - A response body, JSON-parsed when the content-type says so
//! - [`CallOutcome`] - One executed request's response plus body
//! - [`Protocol`] - URL scheme with default ports
//!
//! ### Invocation Types
//! - [`Method`] - Validated HTTP method token from the canonical registry
//! - [`Identifier`] - Primitive record identifier (text or number)
//! - [`CallOptions`] - Per-call headers, query, and body
//! - [`CallArgs`] - The accepted invocation shapes
//!
//! ### Resource Records
//! - [`MapRecord`] - A map's id and editable source definition
//! - [`ConnectionRecord`] - A connection's id, timestamps, and editable fields

pub mod call;
pub mod error;
pub mod method;
pub mod models;
pub mod request;

// Re-export error types
pub use error::CoreError;

// Re-export invocation types
pub use call::{CallArgs, CallOptions, Identifier};
pub use method::Method;

// Re-export wire types
pub use request::{ApiRequest, ApiResponse, CallOutcome, Payload, Protocol};

// Re-export resource records
pub use models::{ConnectionRecord, MapRecord};
