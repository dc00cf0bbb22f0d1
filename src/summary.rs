use crate::ledger::OrderLedger;
use crate::status::Status;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct StatusCount {
    pub status: Status,
    pub count: u64,
}

/// Aggregate view over a ledger snapshot: order counts per lifecycle stage
/// and the total amount charged across paid orders.
///
/// Every known status gets an entry, zero counts included.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    counts: Vec<StatusCount>,
    total_charged: u64,
}

impl Summary {
    pub fn generate(ledger: &OrderLedger) -> Self {
        let mut counts: Vec<StatusCount> = Status::ALL
            .iter()
            .map(|&status| StatusCount { status, count: 0 })
            .collect();
        let mut total_charged = 0u64;

        for record in ledger.records() {
            if let Some(slot) = counts.iter_mut().find(|slot| slot.status == record.status) {
                slot.count += 1;
            }
            if record.status.is_paid() {
                total_charged += record.amount;
            }
        }

        Self {
            counts,
            total_charged,
        }
    }

    pub fn count(&self, status: Status) -> u64 {
        self.counts
            .iter()
            .find(|slot| slot.status == status)
            .map_or(0, |slot| slot.count)
    }

    pub fn total_charged(&self) -> u64 {
        self.total_charged
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.counts {
            writeln!(f, "{}: {}", slot.status.title(), slot.count)?;
        }
        write!(f, "Total amount charged: {}", self.total_charged)
    }
}
