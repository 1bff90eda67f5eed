pub mod session;
pub mod sink;
pub mod worker;

pub use session::Session;
pub use sink::{BillSink, CollectSink, StdoutSink};
