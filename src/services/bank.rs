//! Bank service - the in-memory ledger of accounts.
//!
//! This service handles:
//! - Account number assignment
//! - Opening and registering accounts
//! - Lookup by number
//! - Transfers between two accounts of the same ledger
//!
//! # Concurrency
//!
//! `Bank` itself is plain single-threaded data. The HTTP layer shares it behind one
//! `tokio::sync::RwLock` (see [`crate::state::AppState`]) and takes the write guard for every
//! mutation, so a transfer's withdraw and deposit cannot interleave with another request.

use crate::{
    error::AppError,
    models::{
        account::{Account, AccountNumber},
        customer::Customer,
        money::Money,
    },
};

/// Default institution name.
pub const DEFAULT_INSTITUTION_NAME: &str = "Banco Digital";

/// Source of account numbers.
///
/// Starts at 1 and only moves forward. Numbers handed out are never reused, even though
/// accounts are never removed anyway. Once `AccountNumber::MAX` has been handed out the
/// sequence is exhausted and yields nothing more.
#[derive(Debug, Clone)]
pub struct AccountNumberSequence {
    next: Option<AccountNumber>,
}

impl AccountNumberSequence {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    #[cfg(test)]
    fn starting_at(next: AccountNumber) -> Self {
        Self { next: Some(next) }
    }

    /// Hand out the next number, or `None` once every number has been used.
    pub fn next_number(&mut self) -> Option<AccountNumber> {
        let number = self.next?;
        self.next = number.checked_add(1);
        Some(number)
    }

    /// The number the next call to `next_number` will return.
    pub fn peek(&self) -> Option<AccountNumber> {
        self.next
    }
}

impl Default for AccountNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// The ledger: every account the institution holds, in the order they were added.
#[derive(Debug)]
pub struct Bank {
    institution_name: String,
    accounts: Vec<Account>,
    sequence: AccountNumberSequence,
}

impl Bank {
    /// Create an empty ledger.
    pub fn new(institution_name: impl Into<String>) -> Self {
        Self {
            institution_name: institution_name.into(),
            accounts: Vec::new(),
            sequence: AccountNumberSequence::new(),
        }
    }

    pub fn institution_name(&self) -> &str {
        &self.institution_name
    }

    /// Draw the next number from this bank's sequence.
    ///
    /// # Errors
    ///
    /// `AccountNumbersExhausted` once the sequence has handed out its last number.
    pub fn next_account_number(&mut self) -> Result<AccountNumber, AppError> {
        self.sequence.next_number().ok_or_else(|| {
            tracing::error!("Account number sequence exhausted");
            AppError::AccountNumbersExhausted
        })
    }

    /// Open a zero-balance account for `owner` and register it.
    ///
    /// Returns the newly added account.
    pub fn open_account(&mut self, owner: Customer) -> Result<&Account, AppError> {
        let number = self.next_account_number()?;
        let index = self.accounts.len();
        self.add_account(Account::new(number, owner));
        Ok(&self.accounts[index])
    }

    #[cfg(test)]
    fn with_sequence(sequence: AccountNumberSequence) -> Self {
        Self {
            sequence,
            ..Self::default()
        }
    }

    /// Append an account to the ledger. Always succeeds.
    pub fn add_account(&mut self, account: Account) {
        tracing::info!(
            account = account.number(),
            "Account of {} added successfully",
            account.owner().name()
        );
        tracing::debug!("{}", account.statement());
        self.accounts.push(account);
    }

    /// First account with the given number, if any.
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// Every account, in insertion order.
    ///
    /// This is the backing storage itself, not a copy.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Move `amount` from `source` to `destination`.
    ///
    /// The origin account is resolved first, then the destination. A transfer from an account
    /// to itself withdraws and then deposits on the same account.
    ///
    /// # Errors
    ///
    /// - `SourceAccountNotFound`: no account numbered `source`
    /// - `DestinationAccountNotFound`: no account numbered `destination`
    /// - `InsufficientFunds`: `amount` exceeds the source balance; nothing is changed
    /// - `BalanceOverflow`: the destination cannot hold `amount` more; nothing is changed
    pub fn transfer(
        &mut self,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Money,
    ) -> Result<(), AppError> {
        let source_index = self
            .position(source)
            .ok_or(AppError::SourceAccountNotFound)?;
        let destination_index = self
            .position(destination)
            .ok_or(AppError::DestinationAccountNotFound)?;

        if source_index == destination_index {
            let account = &mut self.accounts[source_index];
            account.withdraw(amount)?;
            account.deposit(amount)?;
            return Ok(());
        }

        let (from, to) = pair_mut(&mut self.accounts, source_index, destination_index);
        from.transfer(amount, to)?;
        Ok(())
    }

    /// Text listing of every account, one line each.
    pub fn report(&self) -> String {
        if self.accounts.is_empty() {
            return "No accounts registered at the bank.".to_string();
        }

        let lines: Vec<String> = self
            .accounts
            .iter()
            .map(|account| {
                format!(
                    "Ag: {} | Acc: {} | Owner: {} | Balance: {}",
                    account.agency(),
                    account.number(),
                    account.owner().name(),
                    account.balance()
                )
            })
            .collect();

        format!(
            "=== Accounts of {} ===\n{}\n=========================================",
            self.institution_name,
            lines.join("\n")
        )
    }

    fn position(&self, number: AccountNumber) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.number() == number)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(DEFAULT_INSTITUTION_NAME)
    }
}

/// Two distinct mutable elements of a slice, returned in the order asked for.
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
