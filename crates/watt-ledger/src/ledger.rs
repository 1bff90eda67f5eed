use std::sync::Mutex;
use watt_core::Bill;

/// The shared session ledger: the ordered collection of committed bills.
///
/// Appends are serialized by the internal mutex, so no two workers can
/// interleave a commit. Insertion order is commit order — under overlapping
/// workers that may differ from submission order, which is accepted.
/// Reads hand out a clone, so no caller ever iterates while holding the
/// lock; they are meaningful only once the relevant appends have completed
/// (submit-and-wait guarantees that by construction).
#[derive(Default)]
pub struct Ledger {
    bills: Mutex<Vec<Bill>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            bills: Mutex::new(Vec::new()),
        }
    }

    /// Commit a bill. Exclusive access for the duration of the append.
    pub fn append(&self, bill: Bill) {
        let mut bills = self.bills.lock().unwrap();
        bills.push(bill);
        tracing::debug!(count = bills.len(), "bill committed to ledger");
    }

    /// Clone out the committed bills in commit order.
    pub fn snapshot(&self) -> Vec<Bill> {
        self.bills.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.lock().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.bills.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use watt_core::{calculate, Consumer};

    fn bill(id: &str, units: i64) -> Bill {
        Bill::new(Consumer::new(id, "test", units).unwrap()).unwrap()
    }

    #[test]
    fn starts_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn append_preserves_commit_order() {
        let ledger = Ledger::new();
        ledger.append(bill("C1", 50));
        ledger.append(bill("C2", 250));
        let bills = ledger.snapshot();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].consumer.id, "C1");
        assert_eq!(bills[1].consumer.id, "C2");
    }

    #[test]
    fn snapshot_is_a_clone() {
        let ledger = Ledger::new();
        ledger.append(bill("C1", 50));
        let first = ledger.snapshot();
        ledger.append(bill("C2", 250));
        // The earlier snapshot is unaffected by the later append.
        assert_eq!(first.len(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn repeated_snapshot_without_append_is_identical() {
        let ledger = Ledger::new();
        ledger.append(bill("C1", 50));
        ledger.append(bill("C2", 700));
        assert_eq!(ledger.snapshot(), ledger.snapshot());
    }

    #[test]
    fn concurrent_appends_all_land() {
        let ledger = Arc::new(Ledger::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    ledger.append(bill(&format!("C{i}"), i * 50));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let bills = ledger.snapshot();
        assert_eq!(bills.len(), 16);
        // Every committed amount is consistent with its own units.
        for b in &bills {
            assert_eq!(b.total_amount, calculate(b.consumer.units).unwrap());
        }
    }
}
