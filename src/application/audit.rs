use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::Amount;

/// One traceable step of a primitive invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditEvent {
    ExpensesRead { path: PathBuf, entries: usize },
    ExpensesUnavailable { path: PathBuf },
    ExpensesReadFailed { detail: String },
    ExpenseRejected { reason: String },
    ExpenseAddAttempt { amount: Amount, description: String },
    ExpenseAdded { amount: Amount, date: NaiveDate },
    ExpenseAddFailed { detail: String },
    PromptBuilt { description: String },
}

impl AuditEvent {
    pub fn level(&self) -> log::Level {
        match self {
            AuditEvent::ExpensesReadFailed { .. } | AuditEvent::ExpenseAddFailed { .. } => {
                log::Level::Error
            }
            AuditEvent::ExpensesUnavailable { .. } | AuditEvent::ExpenseRejected { .. } => {
                log::Level::Warn
            }
            _ => log::Level::Info,
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::ExpensesRead { path, entries } => {
                write!(f, "Read {} expenses from {}", entries, path.display())
            }
            AuditEvent::ExpensesUnavailable { path } => {
                write!(f, "Expense file not found: {}", path.display())
            }
            AuditEvent::ExpensesReadFailed { detail } => {
                write!(f, "Failed to read expenses: {}", detail)
            }
            AuditEvent::ExpenseRejected { reason } => write!(f, "Rejected expense: {}", reason),
            AuditEvent::ExpenseAddAttempt {
                amount,
                description,
            } => write!(f, "Adding expense: ${} for {}", amount, description),
            AuditEvent::ExpenseAdded { amount, date } => {
                write!(f, "Added expense: ${} on {}", amount, date)
            }
            AuditEvent::ExpenseAddFailed { detail } => {
                write!(f, "Failed to add expense: {}", detail)
            }
            AuditEvent::PromptBuilt { description } => {
                write!(f, "Built expense prompt for {}", description)
            }
        }
    }
}

/// Sink for audit events. Installed once when the service is built and
/// shared by every call; implementations only ever append.
pub trait AuditLog: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Forwards events to the `log` facade under the `audit` target, so they
/// land in whatever timestamped sink the process installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudit;

impl AuditLog for LogAudit {
    fn record(&self, event: AuditEvent) {
        log::log!(target: "audit", event.level(), "{}", event);
    }
}

/// Keeps events in memory, for hosts that want to inspect them.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditLog for MemoryAudit {
    fn record(&self, event: AuditEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines() {
        let event = AuditEvent::ExpenseAddAttempt {
            amount: Amount::new(42.5).unwrap(),
            description: "Lunch".to_string(),
        };
        assert_eq!(event.to_string(), "Adding expense: $42.5 for Lunch");
        assert_eq!(event.level(), log::Level::Info);

        let event = AuditEvent::ExpenseAddFailed {
            detail: "disk full".to_string(),
        };
        assert_eq!(event.level(), log::Level::Error);
    }

    #[test]
    fn test_memory_audit_keeps_order() {
        let audit = MemoryAudit::new();
        audit.record(AuditEvent::PromptBuilt {
            description: "first".to_string(),
        });
        audit.record(AuditEvent::PromptBuilt {
            description: "second".to_string(),
        });

        let events = audit.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            AuditEvent::PromptBuilt {
                description: "second".to_string()
            }
        );
    }
}
