//! Handler that runs the directory dispatcher and turns its outcome into reply text.

use async_trait::async_trait;
use directory_core::{Handler, HandlerResponse, InboundEvent, Result};
use std::sync::Arc;
use tracing::{error, instrument};

use crate::format::ResponseFormatter;
use crate::service::DirectoryService;

/// Always answers with `Reply`; store failures become the formatter's generic apology.
#[derive(Clone)]
pub struct DirectoryHandler {
    service: Arc<DirectoryService>,
    formatter: ResponseFormatter,
}

impl DirectoryHandler {
    pub fn new(service: Arc<DirectoryService>, formatter: ResponseFormatter) -> Self {
        Self { service, formatter }
    }
}

#[async_trait]
impl Handler for DirectoryHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let text = match self.service.dispatch(event).await {
            Ok(outcome) => self.formatter.render(&outcome),
            Err(e) => {
                error!(sender_id = %event.sender_id, error = %e, retryable = e.is_retryable(), "Dispatch failed");
                self.formatter.render_error(&e)
            }
        };
        Ok(HandlerResponse::Reply(text))
    }
}
