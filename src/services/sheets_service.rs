//! Spreadsheet sync service.
//!
//! One-way import and export of ledger rows to an external spreadsheet. Nothing here touches
//! the in-memory ledger: an import returns the rows it read, an export appends a single row.
//!
//! # Row Layout
//!
//! Columns A to E, data starting at row 2:
//!
//! | A | B | C | D | E |
//! |---|---|---|---|---|
//! | number | agency | balance (`R$ 12.50`) | owner name | owner tax id |

use crate::{
    config::SheetsConfig,
    error::SheetsError,
    models::{
        account::{Account, AccountNumber},
        customer::Customer,
        money::{CURRENCY_PREFIX, Money},
    },
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;
use url::Url;

/// A raw spreadsheet row: one string per cell.
pub type SheetRow = Vec<String>;

/// Storage backend holding the spreadsheet rows.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// All data rows (header excluded), in sheet order.
    async fn read_rows(&self) -> Result<Vec<SheetRow>, SheetsError>;

    /// Append one row after the last non-empty row.
    async fn append_row(&self, row: SheetRow) -> Result<(), SheetsError>;
}

/// Account as recorded in the spreadsheet.
///
/// Serializes with the same shape as [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetAccount {
    pub agency: u32,
    pub number: AccountNumber,
    pub balance: Money,
    pub owner: Customer,
}

/// Why a row could not be read.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("expected 5 columns, found {0}")]
    MissingColumns(usize),

    #[error("invalid {column}: {value:?}")]
    InvalidValue { column: &'static str, value: String },
}

/// Google Sheets v4 `values` API client.
///
/// Authenticates with a bearer access token supplied by configuration.
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    api_base: Url,
    spreadsheet_id: String,
    access_token: String,
    tab: String,
}

impl GoogleSheetsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl`: the configured API base is not a valid URL
    /// - `Http`: the HTTP client could not be constructed
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            api_base: Url::parse(&config.api_base)?,
            spreadsheet_id: config.spreadsheet_id,
            access_token: config.access_token,
            tab: config.tab,
        })
    }

    /// `{base}/{spreadsheet}/values/{range}`, with each piece percent-encoded as a segment.
    fn values_url(&self, range: &str) -> Result<Url, SheetsError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Body of a `values.get` response. `values` is absent for an empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[async_trait]
impl SheetStore for GoogleSheetsClient {
    async fn read_rows(&self) -> Result<Vec<SheetRow>, SheetsError> {
        let url = self.values_url(&format!("{}!A2:E", self.tab))?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let range: ValueRange = Self::check(response).await?.json().await?;

        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    async fn append_row(&self, row: SheetRow) -> Result<(), SheetsError> {
        let mut url = self.values_url(&format!("{}!A:E:append", self.tab))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }
}

/// Formatted cells come back as strings; anything else is kept in its JSON form.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Read every account row from the spreadsheet.
///
/// Blank rows are skipped silently. Rows that cannot be parsed are skipped with a warning;
/// they never abort the import.
pub async fn import_accounts(store: &dyn SheetStore) -> Result<Vec<SheetAccount>, SheetsError> {
    let rows = store.read_rows().await?;
    let mut accounts = Vec::with_capacity(rows.len());

    for (offset, row) in rows.iter().enumerate() {
        if row.first().is_none_or(|cell| cell.trim().is_empty()) {
            continue;
        }

        match parse_row(row) {
            Ok(account) => accounts.push(account),
            Err(e) => {
                // Data starts at sheet row 2
                tracing::warn!(row = offset + 2, "Skipping spreadsheet row {:?}: {}", row, e);
            }
        }
    }

    tracing::info!("Imported {} accounts from spreadsheet", accounts.len());
    Ok(accounts)
}

/// Append `account` as a new spreadsheet row.
pub async fn export_account(store: &dyn SheetStore, account: &Account) -> Result<(), SheetsError> {
    store.append_row(account_row(account)).await?;
    tracing::info!(account = account.number(), "Account exported to spreadsheet");
    Ok(())
}

/// Cells for `account` in column order.
pub fn account_row(account: &Account) -> SheetRow {
    vec![
        account.number().to_string(),
        account.agency().to_string(),
        account.balance().to_string(),
        account.owner().name().to_string(),
        account.owner().tax_id().to_string(),
    ]
}

/// Parse one row into an account record.
pub fn parse_row(row: &[String]) -> Result<SheetAccount, RowError> {
    if row.len() < 5 {
        return Err(RowError::MissingColumns(row.len()));
    }

    let number = row[0]
        .trim()
        .parse()
        .map_err(|_| invalid("number", &row[0]))?;
    let agency = row[1]
        .trim()
        .parse()
        .map_err(|_| invalid("agency", &row[1]))?;
    let balance = parse_balance(&row[2]).ok_or_else(|| invalid("balance", &row[2]))?;

    Ok(SheetAccount {
        agency,
        number,
        balance,
        owner: Customer::new(row[3].trim(), row[4].trim()),
    })
}

/// Parse a currency-formatted balance.
///
/// Accepts both the exported form (`R$ 1234.50`) and the Brazilian locale form the sheet may
/// reformat it into (`R$ 1.234,50`). When a comma is present it is the decimal separator and
/// dots are thousands separators.
///
/// Without a comma, dots are read as thousands separators only when they group the digits in
/// threes after a non-zero leading group (`R$ 1.234` is 1234, `1.234.567` is 1234567).
/// Anything else keeps the dot as the decimal point (`12.50`, `0.125`).
pub fn parse_balance(raw: &str) -> Option<Money> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches(CURRENCY_PREFIX)
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if is_thousands_grouped(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    if normalized.is_empty() {
        return None;
    }
    Money::from_str(&normalized).ok()
}

fn is_thousands_grouped(digits: &str) -> bool {
    let mut groups = digits.trim_start_matches('-').split('.');
    let lead = groups.next().unwrap_or_default();
    let rest: Vec<&str> = groups.collect();

    !rest.is_empty()
        && (1..=3).contains(&lead.len())
        && !lead.starts_with('0')
        && rest.iter().all(|group| group.len() == 3)
}

fn invalid(column: &'static str, value: &str) -> RowError {
    RowError::InvalidValue {
        column,
        value: value.to_string(),
    }
}
