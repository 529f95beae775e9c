//! Invoice record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A stored invoice record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Generated identifier (32 hex characters).
    pub id: String,
    /// Client name as supplied.
    pub cliente: String,
    /// Invoice total, kept exactly as supplied (number or string).
    pub total: Value,
}

impl Invoice {
    /// Create an invoice with a freshly generated identifier.
    pub fn new(cliente: String, total: Value) -> Self {
        Self {
            id: new_invoice_id(),
            cliente,
            total,
        }
    }
}

/// Incoming payload for invoice creation.
///
/// Both fields deserialize as optional so incomplete payloads reach the
/// handler and are rejected with the service's own error body instead of
/// a framework rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    /// Client name.
    pub cliente: Option<String>,
    /// Invoice total (number or string).
    pub total: Option<Value>,
}

/// Generate a fresh invoice identifier.
///
/// Random v4 UUID rendered as 32 lowercase hex characters, so identifiers
/// are unique for the process lifetime and never derived from content.
pub fn new_invoice_id() -> String {
    Uuid::new_v4().simple().to_string()
}
