//! In-memory news feed served over HTTP.
//!
//! The store is created once at startup with [`state::news::new_store`] and
//! shared with every handler through [`app::build_app`].

pub mod app;
pub mod config;
pub mod errors;
pub mod routes;
pub mod services;
pub mod state;
