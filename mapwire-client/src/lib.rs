// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Mapwire Client
//!
//! The Mapwire SDK: a client for the Mapwire API gateway.
//!
//! The gateway manages **maps** (API endpoint definitions) and
//! **connections** (a map bound to one user's credentials), and proxies
//! ad-hoc **data calls** to the mapped provider endpoints.
//!
//! ## Structure
//!
//! - [`Client`] - entry point; map/connection management and [`Api`] handles
//! - [`Api`] - a handle bound to one map, producing [`Cursor`]s
//! - [`Cursor`] - chainable endpoint/verb configuration resolving to one
//!   executed data call
//! - [`RequestExecutor`] - the transport seam; [`HttpExecutor`] is the
//!   reqwest-backed implementation
//! - [`Map`] / [`Connection`] - resource objects with save/delete routed
//!   through their originating client
//!
//! ## Example
//!
//! ```ignore
//! use mapwire_client::{CallArgs, CallOptions, Client};
//!
//! let client = Client::new("abcd")?;
//! let api = client.api("1234")?;
//!
//! let mut posts = api.endpoint("Posts")?;
//! posts.method("get")?;
//!
//! // GET <data host>/1234/Posts/4?embed=comments
//! let outcome = posts
//!     .call(CallArgs::identifier_with_options(
//!         4,
//!         CallOptions::new().with_query("embed", "comments"),
//!     ))
//!     .await?;
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod connection;
pub mod cursor;
pub mod error;
pub mod executor;
pub mod map;

// Re-export the client surface
pub use api::{Api, ApiIdentity};
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig, DEFAULT_DATA_HOSTNAME, DEFAULT_HOSTNAME};
pub use connection::Connection;
pub use cursor::Cursor;
pub use error::ClientError;
pub use executor::{HttpExecutor, RequestExecutor};
pub use map::Map;

// Re-export the core types callers need for invocations
pub use mapwire_core::{
    ApiRequest, ApiResponse, CallArgs, CallOptions, CallOutcome, CoreError, Identifier, Method,
    Payload, Protocol,
};
