use crate::event::Event;
use crate::status::Status;
use std::collections::{HashMap, HashSet};

/// State of one order. Owned exclusively by the ledger; created only by a
/// valid NEW event and never deleted, terminal statuses included.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OrderRecord {
    pub order_id: u64,
    pub status: Status,
    /// Amount charged for the order, fixed by its creating NEW event.
    pub amount: u64,
    pub last_update_id: u64,
    // Subsumed by the `>` check while update ids must strictly increase;
    // kept so a relaxation to out-of-order acceptance stays a local change.
    seen_update_ids: HashSet<u64>,
}

impl OrderRecord {
    fn new(order_id: u64, update_id: u64, amount: u64) -> Self {
        Self {
            order_id,
            status: Status::New,
            amount,
            last_update_id: update_id,
            seen_update_ids: HashSet::from([update_id]),
        }
    }

    fn is_valid_update(&self, update_id: u64) -> bool {
        !self.seen_update_ids.contains(&update_id) && update_id > self.last_update_id
    }

    fn add_update(&mut self, update_id: u64) {
        self.seen_update_ids.insert(update_id);
        self.last_update_id = update_id;
    }
}

/// Applies validated events under the lifecycle state machine, one record
/// per order id.
///
/// Inapplicable events are absorbed silently: senders may retry, so
/// replays, stale update ids and updates to unknown orders are expected
/// traffic, not errors. A record either takes the whole update or none of
/// it.
#[derive(Debug, Default)]
pub struct OrderLedger {
    records: HashMap<u64, OrderRecord>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: Event) {
        let Some(record) = self.records.get_mut(&event.order_id) else {
            // Only a NEW event creates a record; an update for an order
            // that was never created has nothing to apply to.
            if event.status.is_new()
                && let Some(amount) = event.amount
            {
                self.records.insert(
                    event.order_id,
                    OrderRecord::new(event.order_id, event.update_id, amount),
                );
            }
            return;
        };

        if record.is_valid_update(event.update_id)
            && Status::is_transferrable(record.status, event.status)
        {
            record.add_update(event.update_id);
            record.status = event.status;
        }
    }

    pub fn get(&self, order_id: u64) -> Option<&OrderRecord> {
        self.records.get(&order_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &OrderRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(status: Status, order_id: u64, update_id: u64) -> Event {
        Event {
            order_id,
            update_id,
            status,
            amount: None,
        }
    }

    fn new_order(order_id: u64, update_id: u64, amount: u64) -> Event {
        Event {
            order_id,
            update_id,
            status: Status::New,
            amount: Some(amount),
        }
    }

    #[test]
    fn test_non_new_never_creates_a_record() {
        let mut ledger = OrderLedger::new();
        ledger.apply(update(Status::Canceled, 1, 5));
        ledger.apply(update(Status::Cooking, 1, 6));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_new_creates_a_record() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 5, 20));
        assert_eq!(ledger.len(), 1);

        let record = ledger.get(1).unwrap();
        assert_eq!(record.status, Status::New);
        assert_eq!(record.amount, 20);
        assert_eq!(record.last_update_id, 5);
    }

    #[test]
    fn test_stale_and_replayed_update_ids_are_dropped() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 5, 20));

        // Same updateId as the creating event.
        ledger.apply(update(Status::Cooking, 1, 5));
        assert_eq!(ledger.get(1).unwrap().status, Status::New);

        // Lower updateId.
        ledger.apply(update(Status::Cooking, 1, 2));
        assert_eq!(ledger.get(1).unwrap().status, Status::New);

        // Fresh updateId advances.
        ledger.apply(update(Status::Cooking, 1, 6));
        assert_eq!(ledger.get(1).unwrap().status, Status::Cooking);
        assert_eq!(ledger.get(1).unwrap().last_update_id, 6);
    }

    #[test]
    fn test_illegal_transition_is_dropped_without_consuming_the_id() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 5, 20));
        ledger.apply(update(Status::Cooking, 1, 6));

        // Skips DELIVERING: rejected, and updateId 7 stays usable.
        ledger.apply(update(Status::Delivered, 1, 7));
        let record = ledger.get(1).unwrap();
        assert_eq!(record.status, Status::Cooking);
        assert_eq!(record.last_update_id, 6);

        ledger.apply(update(Status::Delivering, 1, 7));
        assert_eq!(ledger.get(1).unwrap().status, Status::Delivering);

        ledger.apply(update(Status::Canceled, 1, 8));
        assert_eq!(ledger.get(1).unwrap().status, Status::Canceled);
    }

    #[test]
    fn test_canceled_accepts_nothing_further() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 1, 10));
        ledger.apply(update(Status::Canceled, 1, 2));

        ledger.apply(update(Status::Cooking, 1, 3));
        assert_eq!(ledger.get(1).unwrap().status, Status::Canceled);
        assert_eq!(ledger.get(1).unwrap().last_update_id, 2);
    }

    #[test]
    fn test_replayed_event_is_idempotent() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 5, 20));
        ledger.apply(update(Status::Cooking, 1, 6));
        let before = ledger.get(1).unwrap().clone();

        ledger.apply(update(Status::Cooking, 1, 6));
        assert_eq!(ledger.get(1).unwrap(), &before);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_replayed_new_does_not_overwrite_amount() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 5, 20));
        ledger.apply(new_order(1, 6, 99));

        let record = ledger.get(1).unwrap();
        assert_eq!(record.amount, 20);
        assert_eq!(record.status, Status::New);
    }

    #[test]
    fn test_orders_do_not_interact() {
        let mut ledger = OrderLedger::new();
        ledger.apply(new_order(1, 1, 5));
        ledger.apply(new_order(2, 2, 10));
        ledger.apply(update(Status::Cooking, 2, 4));

        assert_eq!(ledger.get(1).unwrap().status, Status::New);
        assert_eq!(ledger.get(2).unwrap().status, Status::Cooking);
    }
}
