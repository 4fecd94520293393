//! Domain entities and API request types.

/// Bank account and its operations
pub mod account;
/// Account holder
pub mod customer;
/// Fixed-point monetary amount
pub mod money;
/// Deposit, withdraw and transfer request bodies
pub mod transaction;
