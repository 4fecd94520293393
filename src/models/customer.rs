//! Account holder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The person who owns an account.
///
/// Immutable once built: fields are private and only exposed through getters. Each
/// `Account` owns its `Customer` outright; customers are never shared between accounts.
///
/// # JSON Example
///
/// ```json
/// { "name": "Ana", "taxId": "111" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    name: String,
    tax_id: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Taxpayer identifier (CPF).
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tax_id)
    }
}
