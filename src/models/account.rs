//! Account entity and API request types.
//!
//! This module defines:
//! - `Account`: a bank account with its owner and balance, plus the deposit/withdraw/transfer rules
//! - `CreateAccountRequest`: request body for opening accounts

use crate::error::{BalanceOverflow, InsufficientFunds, TransferError};
use crate::models::{customer::Customer, money::Money};
use serde::{Deserialize, Serialize};

/// Account number. Assigned by the bank's sequence, starting at 1.
pub type AccountNumber = u32;

/// Branch identifier shared by every account.
pub const DEFAULT_AGENCY: u32 = 1;

/// A bank account.
///
/// # JSON Example
///
/// ```json
/// {
///   "agency": 1,
///   "number": 1,
///   "balance": 60.0,
///   "owner": { "name": "Ana", "taxId": "111" }
/// }
/// ```
///
/// # Amount Rules
///
/// Non-positive amounts passed to `deposit` or `withdraw` are ignored: a warning is logged and
/// the balance is left alone, but no error is returned. A withdrawal larger than the balance
/// is an error, and so is a deposit that would overflow the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    agency: u32,
    number: AccountNumber,
    balance: Money,
    owner: Customer,
}

impl Account {
    /// Open an empty account on the default agency.
    ///
    /// Uniqueness of `number` is the caller's responsibility; use
    /// [`Bank::open_account`](crate::services::bank::Bank::open_account) to draw it from the
    /// bank's sequence.
    pub fn new(number: AccountNumber, owner: Customer) -> Self {
        Self {
            agency: DEFAULT_AGENCY,
            number,
            balance: Money::ZERO,
            owner,
        }
    }

    pub fn agency(&self) -> u32 {
        self.agency
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn owner(&self) -> &Customer {
        &self.owner
    }

    /// Add `amount` to the balance.
    ///
    /// `amount <= 0` is a no-op that only logs a warning and returns `Ok`.
    ///
    /// # Errors
    ///
    /// `BalanceOverflow` if the new balance would not fit in a decimal. The balance is
    /// unchanged.
    pub fn deposit(&mut self, amount: Money) -> Result<(), BalanceOverflow> {
        if !amount.is_positive() {
            tracing::warn!(
                account = self.number,
                "Deposit amount must be positive, ignoring {}",
                amount
            );
            return Ok(());
        }

        self.balance = self.credited(amount)?;
        tracing::info!(account = self.number, "Deposit of {} completed", amount);
        Ok(())
    }

    /// Remove `amount` from the balance.
    ///
    /// `amount <= 0` is a no-op that only logs a warning and returns `Ok`.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` if `amount` exceeds the balance. The balance is unchanged.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), InsufficientFunds> {
        if !amount.is_positive() {
            tracing::warn!(
                account = self.number,
                "Withdrawal amount must be positive, ignoring {}",
                amount
            );
            return Ok(());
        }

        let insufficient = InsufficientFunds {
            balance: self.balance,
            requested: amount,
        };
        if amount > self.balance {
            return Err(insufficient);
        }
        self.balance = self.balance.checked_sub(amount).ok_or(insufficient)?;

        tracing::info!(account = self.number, "Withdrawal of {} completed", amount);
        Ok(())
    }

    /// Move `amount` from this account to `destination`.
    ///
    /// The destination is checked for room before anything is withdrawn, so on any error both
    /// balances stay as they were.
    ///
    /// # Errors
    ///
    /// - `BalanceOverflow`: the destination cannot hold `amount` more
    /// - `InsufficientFunds`: `amount` exceeds this account's balance
    pub fn transfer(
        &mut self,
        amount: Money,
        destination: &mut Account,
    ) -> Result<(), TransferError> {
        if amount.is_positive() {
            destination.credited(amount)?;
        }

        self.withdraw(amount)?;
        destination.deposit(amount)?;

        tracing::info!(
            from = self.number,
            to = destination.number,
            "Transfer of {} to {} completed",
            amount,
            destination.owner.name()
        );
        Ok(())
    }

    /// Balance after crediting `amount`, without applying it.
    fn credited(&self, amount: Money) -> Result<Money, BalanceOverflow> {
        self.balance.checked_add(amount).ok_or(BalanceOverflow {
            account: self.number,
            amount,
        })
    }

    /// Formatted snapshot of the account's identity and balance.
    pub fn statement(&self) -> String {
        format!(
            "=== Account Statement ===\nOwner: {}\nAgency: {}\nNumber: {}\nBalance: {}",
            self.owner.name(),
            self.agency,
            self.number,
            self.balance
        )
    }
}

/// Request body for opening a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ana",
///   "taxId": "111"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Owner's full name
    pub name: String,

    /// Owner's taxpayer id (CPF)
    pub tax_id: String,
}

impl From<CreateAccountRequest> for Customer {
    fn from(request: CreateAccountRequest) -> Self {
        Customer::new(request.name, request.tax_id)
    }
}
