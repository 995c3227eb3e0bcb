//! Component factory: builds stores, engine, dispatcher and handler chain from config.

use anyhow::Result;
use directory_core::{Clock, SystemClock};
use handler_chain::HandlerChain;
use std::sync::Arc;
use storage::{BusinessRepository, RecordStore};
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::format::ResponseFormatter;
use crate::handlers::{DirectoryHandler, LoggingHandler};
use crate::search::SearchEngine;
use crate::service::DirectoryService;
use crate::session::{InMemorySessionStore, SessionStore};

/// Assembled dependencies for the runner and CLI subcommands.
#[derive(Clone)]
pub struct BotComponents {
    pub records: Arc<dyn RecordStore>,
    pub sessions: Arc<InMemorySessionStore>,
    pub search: SearchEngine,
    pub service: Arc<DirectoryService>,
    pub formatter: ResponseFormatter,
}

/// Opens the SQLite-backed record store named by DATABASE_URL.
#[instrument(skip(config))]
pub async fn create_record_store(config: &BotConfig) -> Result<Arc<dyn RecordStore>> {
    let repo = BusinessRepository::new(config.database_url()).await.map_err(|e| {
        error!(error = %e, database_url = %config.database_url(), "Failed to open record store");
        anyhow::anyhow!("Failed to open record store: {}", e)
    })?;
    info!(database_url = %config.database_url(), "Record store ready");
    Ok(Arc::new(repo))
}

/// Builds components around an existing record store and clock (tests inject both).
pub fn build_components(
    config: &BotConfig,
    records: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
) -> BotComponents {
    let dir = config.directory();
    let sessions = Arc::new(InMemorySessionStore::new(clock.clone(), dir.session_timeout()));
    let search = SearchEngine::new(records.clone(), dir.search_result_limit, dir.store_timeout());
    let session_store: Arc<dyn SessionStore> = sessions.clone();
    let service = Arc::new(DirectoryService::new(
        session_store,
        records.clone(),
        search.clone(),
        clock,
        dir.store_timeout(),
    ));
    let formatter = ResponseFormatter::new(dir.search_result_limit, dir.support_email.clone());

    BotComponents {
        records,
        sessions,
        search,
        service,
        formatter,
    }
}

/// Opens the record store and builds components with the system clock.
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let records = create_record_store(config).await?;
    Ok(build_components(config, records, Arc::new(SystemClock)))
}

/// Chain order: logging, then the directory handler.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(DirectoryHandler::new(
            components.service.clone(),
            components.formatter.clone(),
        )))
}
