//! # storylink - Jira stories in, acceptance criteria out
//!
//! storylink connects to a Jira Cloud site, lists the stories of the `GENAI`
//! project, and turns a story's description into plain text plus the
//! acceptance criteria a test generator needs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the API
//! storylink serve --port 8081
//!
//! # Point it at Jira
//! storylink connect --base-url https://acme.atlassian.net --email qa@acme.io --api-token $TOKEN
//!
//! # Browse stories
//! storylink stories
//! storylink story GENAI-42
//!
//! # Flatten a saved ADF description offline
//! storylink convert description.json
//! ```
//!
//! ## Modules
//!
//! - [`adf`]: Atlassian Document Format to plain text
//! - [`criteria`]: acceptance-criteria extraction
//! - [`jira`]: Jira REST client
//! - [`server`]: axum HTTP API
//! - [`api_client`]: typed client for the HTTP API
//! - [`model`]: request and response payloads
//! - [`validation`]: payload schemas
//! - [`config`]: configuration loading
//! - [`error`]: error types and result aliases

/// Atlassian Document Format conversion.
pub mod adf;

/// Typed client for the storylink HTTP API.
pub mod api_client;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.storylink.toml` files and upward discovery.
pub mod config;

/// Acceptance-criteria extraction.
pub mod criteria;

/// Error types and result aliases.
///
/// Defines `StorylinkError` enum and `Result<T>` type alias.
pub mod error;

pub mod http;

/// Jira Cloud REST client.
pub mod jira;

pub mod logging;

/// Payloads for the HTTP API.
pub mod model;

/// HTTP API built on axum.
pub mod server;

/// Inbound and outbound payload schemas.
pub mod validation;
