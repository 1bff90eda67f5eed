use crate::sink::{BillSink, StdoutSink};
use crate::worker;
use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;
use watt_core::{Bill, BillingError, Consumer};
use watt_ledger::Ledger;

/// Orchestrates billing workers over one shared ledger.
///
/// The ledger is owned here and handed to workers via `Arc` — there is no
/// ambient global. In the default mode every submission spawns one worker
/// and waits for it, so the API is serialized even though the work runs on
/// its own thread. `submit_detached` relaxes that; overlapping commits are
/// still serialized by the ledger itself.
pub struct Session {
    ledger: Arc<Ledger>,
    sink: Arc<dyn BillSink>,
}

impl Session {
    pub fn new(sink: Arc<dyn BillSink>) -> Self {
        Self {
            ledger: Arc::new(Ledger::new()),
            sink,
        }
    }

    /// Session printing bills to stdout, the interactive default.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink))
    }

    /// Submit one bill and wait for its worker to finish.
    ///
    /// A worker that dies before delivering a result surfaces as
    /// `Interrupted`; the worker is never cancelled from here, so a commit
    /// it completed anyway is already in the ledger.
    pub fn submit(&self, consumer: Consumer) -> Result<(), BillingError> {
        tracing::debug!(id = %consumer.id, units = consumer.units, "submitting bill");
        match self.spawn_worker(consumer).join() {
            Ok(outcome) => outcome,
            Err(_) => Err(BillingError::Interrupted(
                "billing worker died before delivering a result".to_string(),
            )),
        }
    }

    /// Fire-and-forget submission. The caller joins the handle later;
    /// until then reads of the ledger are not meaningful.
    pub fn submit_detached(&self, consumer: Consumer) -> JoinHandle<Result<(), BillingError>> {
        self.spawn_worker(consumer)
    }

    fn spawn_worker(&self, consumer: Consumer) -> JoinHandle<Result<(), BillingError>> {
        let ledger = Arc::clone(&self.ledger);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || worker::run(consumer, &ledger, sink.as_ref()))
    }

    /// Snapshot of all committed bills, in commit order. Call only between
    /// submissions, never while one is in flight.
    pub fn bills(&self) -> Vec<Bill> {
        self.ledger.snapshot()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Append the current ledger to the export file. Returns the number of
    /// lines written; on failure, lines already written stay in the file.
    pub fn export(&self, path: &Path) -> Result<usize, BillingError> {
        watt_ledger::export_to_path(&self.bills(), path)
    }
}
