use watt_core::Bill;

/// Output interface for a worker's completed bill.
pub trait BillSink: Send + Sync {
    fn emit(&self, bill: &Bill);
}

/// Prints the bill block to stdout.
pub struct StdoutSink;

impl BillSink for StdoutSink {
    fn emit(&self, bill: &Bill) {
        println!("\n{bill}");
    }
}

/// Collects rendered bills in memory (for testing).
#[derive(Default)]
pub struct CollectSink {
    emitted: std::sync::Mutex<Vec<String>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self {
            emitted: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().unwrap().clone()
    }
}

impl BillSink for CollectSink {
    fn emit(&self, bill: &Bill) {
        self.emitted.lock().unwrap().push(bill.to_string());
    }
}
