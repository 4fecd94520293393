//! Shared application state.
//!
//! Handlers receive `AppState` through axum's `State` extractor. Cloning it is cheap: every
//! field is reference counted.

use crate::services::{bank::Bank, sheets_service::SheetStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The ledger behind a single reader/writer lock.
///
/// Read guards for listing and lookups, the write guard for anything that opens an account or
/// moves money.
pub type SharedBank = Arc<RwLock<Bank>>;

#[derive(Clone)]
pub struct AppState {
    pub bank: SharedBank,

    /// Spreadsheet backend, `None` when sync is not configured
    pub sheets: Option<Arc<dyn SheetStore>>,
}

impl AppState {
    pub fn new(bank: Bank) -> Self {
        Self {
            bank: Arc::new(RwLock::new(bank)),
            sheets: None,
        }
    }

    /// Attach a spreadsheet backend.
    pub fn with_sheets(mut self, store: Arc<dyn SheetStore>) -> Self {
        self.sheets = Some(store);
        self
    }
}
