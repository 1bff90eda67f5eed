pub mod export;
pub mod ledger;

pub use export::{export_to_path, export_to_writer};
pub use ledger::Ledger;
