use std::collections::VecDeque;
use std::sync::Mutex;
use wayfare_core::{PaymentAdapter, RandomSource, TransactionRecord};

/// Replays a fixed list of draws, then keeps returning the lower bound.
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws: draws.into() }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, _high: u32) -> u32 {
        self.draws.pop_front().unwrap_or(low)
    }
}

#[derive(Default)]
pub struct RecordingPaymentAdapter {
    records: Mutex<Vec<TransactionRecord>>,
}

impl RecordingPaymentAdapter {
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl PaymentAdapter for RecordingPaymentAdapter {
    fn record_transaction(&self, record: &TransactionRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
