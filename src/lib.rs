//! Harbor - Minimal Static File Server
//!
//! Core library for HTTP parsing and sandboxed file serving.

pub mod config;
pub mod http;
pub mod server;
