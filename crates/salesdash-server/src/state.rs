//! Shared application state

#![allow(clippy::result_large_err)]

use std::sync::Arc;
use std::time::Duration;

use salesdash_core::errors::Result;
use salesdash_core::{MemoryStore, RecordStore};
use salesdash_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult,
};
use salesdash_store::seed::fetch_feed;
use salesdash_store::SqliteStore;
use tokio::sync::Mutex;
use tracing::{info, Span};

use crate::config::{ServerConfig, StoreBackend};
use crate::error::join_error;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct AppState {
    store: Arc<dyn RecordStore>,
    seed_url: String,
    seed_timeout: Duration,
    request_timeout: Duration,
    /// Held across fetch and replace so reseeds never overlap
    reseed_gate: Mutex<()>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, seed_url: impl Into<String>, seed_timeout: Duration) -> Self {
        Self {
            store,
            seed_url: seed_url.into(),
            seed_timeout,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            reseed_gate: Mutex::new(()),
        }
    }

    /// Open the configured store backend
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Persistence` when the SQLite file cannot be opened or
    /// migrated.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let store: Arc<dyn RecordStore> = match config.store {
            StoreBackend::Sqlite => {
                info!(path = %config.db_path.display(), "opening sqlite store");
                Arc::new(SqliteStore::open(&config.db_path)?)
            }
            StoreBackend::Memory => {
                info!("using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::new(store, config.seed_url.clone(), config.seed_timeout)
            .with_request_timeout(config.request_timeout))
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Run a read-only query on the blocking pool, inside the caller's span
    ///
    /// # Errors
    ///
    /// Propagates the query's error; a panicked task becomes `Internal`.
    pub async fn run_query(&self, query: EngineQuery) -> Result<EngineQueryResult> {
        let store = Arc::clone(&self.store);
        let span = Span::current();
        tokio::task::spawn_blocking(move || span.in_scope(|| apply_engine_query(query, store.as_ref())))
            .await
            .map_err(join_error)?
    }

    /// Fetch the configured feed and replace the store with it
    ///
    /// The store is only touched once the whole feed has been fetched and
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns `Timeout`/`ExternalService` for fetch failures and
    /// `Persistence` when the replace fails.
    pub async fn reseed(&self) -> Result<usize> {
        let _gate = self.reseed_gate.lock().await;

        let records = fetch_feed(&self.seed_url, self.seed_timeout).await?;
        let store = Arc::clone(&self.store);
        let command = EngineCommand::ReplaceRecords {
            records,
            source: self.seed_url.clone(),
        };
        let span = Span::current();
        let EngineCommandResult::Replaced { records } = tokio::task::spawn_blocking(move || {
            span.in_scope(|| apply_engine_command(command, store.as_ref()))
        })
        .await
        .map_err(join_error)??;
        Ok(records)
    }
}
