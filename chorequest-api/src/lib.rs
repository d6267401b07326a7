//! # ChoreQuest API Server Library
//!
//! This library provides the core functionality for the ChoreQuest API
//! server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Extractors with JSON-shaped rejections
//! - `mailer`: Password-reset mail delivery (log-file backed)
//! - `routes`: API route handlers
//! - `spa`: Static frontend serving with SPA fallback

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod mailer;
pub mod routes;
pub mod spa;
