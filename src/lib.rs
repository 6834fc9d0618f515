//! Library surface for the review-web server.
//!
//! The binary in `main.rs` wires these modules together; integration tests
//! build the router in-process through this crate.

pub mod compile_db;
pub mod config;
pub mod render;
pub mod review;
pub mod routes;
pub mod state;
