//! Cookie header parsing with signed (`s:`) and JSON (`j:`) values, served
//! as an axum middleware.
//!
//! The parsing core lives in [`services::cookies`] and has no HTTP dependency.
//! [`middleware::cookie_parser`] runs it once per request and stores the
//! [`services::cookies::ParsedCookies`] in request extensions.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
