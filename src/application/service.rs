use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{format_amount, Expense, PaymentMethod};
use crate::storage::{LedgerError, LedgerStore};

use super::{AuditEvent, AuditLog, LogAudit};

/// Caller-facing text for failures whose detail stays in the audit log.
pub const READ_FAILED_MESSAGE: &str = "Error: unable to read expense data";
pub const ADD_FAILED_MESSAGE: &str = "Error: unable to add expense";

/// The expense primitives an agent host calls: a resource, a tool and a
/// prompt. Every operation returns the text handed back to the agent;
/// failures are turned into messages here and never propagate.
pub struct ExpenseService {
    store: LedgerStore,
    audit: Arc<dyn AuditLog>,
}

impl ExpenseService {
    pub fn new(store: LedgerStore, audit: Arc<dyn AuditLog>) -> Self {
        Self { store, audit }
    }

    /// Service over the ledger at `path`, auditing through the `log` facade.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(LedgerStore::new(path), Arc::new(LogAudit))
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Dump every expense as one line each, preceded by the entry count.
    pub async fn get_expenses_data(&self) -> String {
        let expenses = match self.store.read_all().await {
            Ok(expenses) => expenses,
            Err(LedgerError::NotFound(path)) => {
                self.audit.record(AuditEvent::ExpensesUnavailable { path });
                return format!("Error: {} file not found", self.store.file_name());
            }
            Err(e) => {
                self.audit.record(AuditEvent::ExpensesReadFailed {
                    detail: e.to_string(),
                });
                return READ_FAILED_MESSAGE.to_string();
            }
        };

        self.audit.record(AuditEvent::ExpensesRead {
            path: self.store.path().to_path_buf(),
            entries: expenses.len(),
        });

        let mut content = format!("Expense data ({} entries):\n\n", expenses.len());
        for expense in &expenses {
            content.push_str(&expense.render_line());
            content.push('\n');
        }
        content
    }

    /// Validate and append one expense.
    pub async fn add_expense(
        &self,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
        payment_method: PaymentMethod,
    ) -> String {
        let expense = match Expense::new(date, amount, category, description, payment_method) {
            Ok(expense) => expense,
            Err(e) => {
                self.audit.record(AuditEvent::ExpenseRejected {
                    reason: e.to_string(),
                });
                return e.to_string();
            }
        };

        self.audit.record(AuditEvent::ExpenseAddAttempt {
            amount: expense.amount,
            description: expense.description.clone(),
        });

        if let Err(e) = self.store.append(&expense).await {
            self.audit.record(AuditEvent::ExpenseAddFailed {
                detail: e.to_string(),
            });
            return ADD_FAILED_MESSAGE.to_string();
        }

        self.audit.record(AuditEvent::ExpenseAdded {
            amount: expense.amount,
            date: expense.date,
        });

        format!(
            "Successfully added expense: ${} for {} on {}",
            expense.amount, expense.description, expense.date
        )
    }

    /// Instructions asking the agent to record an expense with the
    /// `add_expense` tool. Nothing is validated or written.
    pub fn create_expense_prompt(
        &self,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
        payment_method: &str,
    ) -> String {
        self.audit.record(AuditEvent::PromptBuilt {
            description: description.to_string(),
        });

        format!(
            "Please add the following expense:\n\
             - Date: {}\n\
             - Amount: ${}\n\
             - Category: {}\n\
             - Description: {}\n\
             - Payment Method: {}\n\
             \n\
             Use the `add_expense` tool to record this transaction.",
            date,
            format_amount(amount),
            category,
            description,
            payment_method
        )
    }
}
