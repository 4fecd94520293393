//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use crate::services::bank::DEFAULT_INSTITUTION_NAME;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `INSTITUTION_NAME` (optional): name of the bank, defaults to "Banco Digital"
/// - `SHEETS_SPREADSHEET_ID` (optional): spreadsheet to sync with; sync is disabled when unset
/// - `SHEETS_ACCESS_TOKEN` (optional): OAuth bearer token for the Sheets API
/// - `SHEETS_TAB` (optional): sheet tab holding the rows, defaults to "Accounts"
/// - `SHEETS_API_BASE` (optional): Sheets API base URL
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_institution_name")]
    pub institution_name: String,

    pub sheets_spreadsheet_id: Option<String>,

    pub sheets_access_token: Option<String>,

    #[serde(default = "default_sheets_tab")]
    pub sheets_tab: String,

    #[serde(default = "default_sheets_api_base")]
    pub sheets_api_base: String,
}

/// Settings for the spreadsheet client, present only when sync is fully configured.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub access_token: String,
    pub tab: String,
    pub api_base: String,
}

fn default_port() -> u16 {
    8080
}

fn default_institution_name() -> String {
    DEFAULT_INSTITUTION_NAME.to_string()
}

fn default_sheets_tab() -> String {
    "Accounts".to_string()
}

fn default_sheets_api_base() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed into its expected
    /// type (e.g., a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }

    /// Spreadsheet settings, if both the spreadsheet id and access token are set.
    ///
    /// A half-configured sync is logged and treated as disabled.
    pub fn sheets(&self) -> Option<SheetsConfig> {
        match (&self.sheets_spreadsheet_id, &self.sheets_access_token) {
            (Some(spreadsheet_id), Some(access_token)) => Some(SheetsConfig {
                spreadsheet_id: spreadsheet_id.clone(),
                access_token: access_token.clone(),
                tab: self.sheets_tab.clone(),
                api_base: self.sheets_api_base.clone(),
            }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "SHEETS_SPREADSHEET_ID and SHEETS_ACCESS_TOKEN must both be set; spreadsheet sync disabled"
                );
                None
            }
        }
    }
}
