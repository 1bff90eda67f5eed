use crate::sink::BillSink;
use watt_core::{Bill, BillingError, Consumer};
use watt_ledger::Ledger;

/// One unit of billing work: compute the bill, commit it to the ledger,
/// then emit the display representation.
///
/// If the calculator rejects the input, nothing is committed and the error
/// goes back to the supervisor — a partial record never reaches the ledger.
pub fn run(consumer: Consumer, ledger: &Ledger, sink: &dyn BillSink) -> Result<(), BillingError> {
    let bill = Bill::new(consumer)?;
    ledger.append(bill.clone());
    sink.emit(&bill);
    Ok(())
}
