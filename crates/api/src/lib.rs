//! HTTP front end: serves the dashboard page and turns requests into
//! dashboard events.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
