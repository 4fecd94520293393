//! Request bodies for balance-moving operations.
//!
//! - `AmountRequest`: deposit and withdraw
//! - `TransferRequest`: transfer to another account

use crate::models::{account::AccountNumber, money::Money};
use serde::Deserialize;

/// Request to deposit into or withdraw from an account.
///
/// # JSON Example
///
/// ```json
/// { "amount": 12.50 }
/// ```
///
/// The amount is taken as given. Zero or negative values are accepted here and turned into
/// no-ops by the account itself.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: Money,
}

/// Request to transfer money from the account in the URL to another account.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 60.00,
///   "destinationNumber": 2
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Amount to move
    pub amount: Money,

    /// Account that receives the money
    pub destination_number: AccountNumber,
}
