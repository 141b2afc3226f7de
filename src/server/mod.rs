//! Listening socket setup and the per-connection accept loop.

pub mod listener;
