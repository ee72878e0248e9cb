//! Web server for the GitOps-with-monitoring project showcase.
//!
//! Serves the single-page site from a public asset directory and exposes the
//! project description document plus a health probe under `/api`. The
//! document is built once at startup and is read-only for the life of the
//! process.

pub mod api;
pub mod config;
pub mod response;
