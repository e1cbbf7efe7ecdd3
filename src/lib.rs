pub mod config;
pub mod error;
pub mod normalize;
pub mod responder;
pub mod stats;
pub mod types;
pub mod webhook;
