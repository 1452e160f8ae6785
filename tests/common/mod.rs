// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use expenses_tracker::application::{AuditEvent, ExpenseService, MemoryAudit};
use expenses_tracker::storage::LedgerStore;
use expenses_tracker::PaymentMethod;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const HEADER: &str = "date,amount,category,description,payment_method";

/// Helper to create a service over a ledger path inside a fresh temp dir.
/// The ledger file itself is not created.
pub fn test_service() -> Result<(ExpenseService, Arc<MemoryAudit>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let ledger_path = temp_dir.path().join("expenses.csv");
    let (service, audit) = service_at(ledger_path);
    Ok((service, audit, temp_dir))
}

/// Helper to create a service over an arbitrary path with in-memory auditing.
pub fn service_at(path: PathBuf) -> (ExpenseService, Arc<MemoryAudit>) {
    let audit = Arc::new(MemoryAudit::new());
    let service = ExpenseService::new(LedgerStore::new(path), audit.clone());
    (service, audit)
}

/// Raw content of the ledger file.
pub fn ledger_contents(service: &ExpenseService) -> Result<String> {
    Ok(std::fs::read_to_string(service.store().path())?)
}

/// Count audit events matching a predicate.
pub fn count_events(audit: &MemoryAudit, predicate: impl Fn(&AuditEvent) -> bool) -> usize {
    audit.events().iter().filter(|e| predicate(e)).count()
}

/// Test fixture: a few typical expenses
pub struct SampleExpenses;

impl SampleExpenses {
    pub const ROWS: [(&'static str, f64, &'static str, &'static str, PaymentMethod); 3] = [
        ("2024-03-01", 42.5, "Food", "Lunch", PaymentMethod::Cash),
        ("2024-03-02", 15.0, "Transport", "Taxi", PaymentMethod::Visa),
        ("2024-03-03", 120.99, "Shopping", "Shoes", PaymentMethod::Amex),
    ];

    /// Record every sample row through the tool.
    pub async fn record_all(service: &ExpenseService) {
        for (date, amount, category, description, method) in Self::ROWS {
            service
                .add_expense(date, amount, category, description, method)
                .await;
        }
    }
}
