pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod response;
pub mod server;
pub mod telemetry;
