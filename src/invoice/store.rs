//! In-memory invoice store.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use super::types::Invoice;

/// In-memory invoice store keyed by generated identifier.
///
/// Cheap to clone: clones share the same underlying map. The map is the
/// only state in the service and is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    invoices: Arc<DashMap<String, Invoice>>,
}

impl InvoiceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an invoice, store it, and return the stored record.
    pub fn create(&self, cliente: String, total: Value) -> Invoice {
        let invoice = Invoice::new(cliente, total);
        self.invoices.insert(invoice.id.clone(), invoice.clone());
        invoice
    }

    /// Look up an invoice by identifier.
    pub fn get(&self, id: &str) -> Option<Invoice> {
        self.invoices.get(id).map(|entry| entry.value().clone())
    }

    /// Snapshot of the entire mapping, keyed by identifier.
    pub fn all(&self) -> HashMap<String, Invoice> {
        self.invoices
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Number of stored invoices.
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
