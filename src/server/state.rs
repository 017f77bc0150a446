use axum::extract::FromRef;

use crate::context::RecommenderContext;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// Loaded once and never mutated, so it is shared without a lock.
pub type GuardedContext = Arc<RecommenderContext>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub context: GuardedContext,
}

impl ServerState {
    pub fn new(config: ServerConfig, context: GuardedContext) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            context,
        }
    }
}

impl FromRef<ServerState> for GuardedContext {
    fn from_ref(input: &ServerState) -> Self {
        input.context.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
