use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Every sample and catalog price is quoted in this currency.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A simulated charge taken by the booking workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub transaction_id: String, // TXN-NNNNNN
    pub amount: f64,
    pub currency: String,
    pub route: String,
    pub recorded_at: DateTime<Utc>,
}

/// Receives every transaction the workflow takes.
///
/// Implementations must not block and cannot fail; the workflow has no
/// payment failure path.
pub trait PaymentAdapter: Send + Sync {
    fn record_transaction(&self, record: &TransactionRecord);
}

/// Default adapter: no gateway, the transaction is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPaymentAdapter;

impl PaymentAdapter for SimulatedPaymentAdapter {
    fn record_transaction(&self, record: &TransactionRecord) {
        tracing::info!(
            transaction_id = %record.transaction_id,
            amount = record.amount,
            currency = %record.currency,
            route = %record.route,
            "Simulated payment taken"
        );
    }
}
