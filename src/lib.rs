//! healthcors - a liveness probe behind a CORS policy for a browser front end.

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
