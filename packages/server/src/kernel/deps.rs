//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. External services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::kernel::BaseAI;

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    /// AI client for all LLM operations. The default model comes from
    /// configuration; `complete_with_model` overrides it per call.
    pub ai: Arc<dyn BaseAI>,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>) -> Self {
        Self { ai }
    }
}
