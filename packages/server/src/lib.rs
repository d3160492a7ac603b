// WritePrep - API Core
//
// This crate provides the backend API for the essay coaching service:
// sample essay generation, rubric scoring, and structured writing
// analysis. Raw LLM output is normalized by the feedback crate before
// anything reaches a client.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
