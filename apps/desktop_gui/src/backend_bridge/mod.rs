//! Bridge between the egui thread and the tokio worker that talks to the product API.

pub mod commands;
pub mod host;
pub mod runtime;
