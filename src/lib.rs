pub mod configuration;
pub mod console;
pub mod domain;
pub mod error;
pub mod fields;
pub mod handler;
pub mod mailto;
pub mod telemetry;
