//! docfind - web front-end for a full-text document search service.
//!
//! Serves the search and detail pages for a document store whose search
//! engine, index, and file storage live behind an external HTTP backend.
//! This crate only forwards queries and renders results; it holds no state
//! of its own.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod server;
