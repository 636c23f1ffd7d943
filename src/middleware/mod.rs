//! Middleware HTTP

pub mod cors;

pub use cors::*;
