use crate::consumer::Consumer;
use crate::error::BillingError;
use crate::tariff::{calculate, format_amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed bill: a consumer identity plus the charge frozen at
/// construction. Never mutated after it is built; once committed, the
/// ledger owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub consumer: Consumer,
    pub total_amount: f64,
}

impl Bill {
    /// Apply the tariff to the consumer's units and freeze the result.
    /// Fails without side effects if the calculator rejects the input.
    pub fn new(consumer: Consumer) -> Result<Self, BillingError> {
        let total_amount = calculate(consumer.units)?;
        Ok(Self {
            consumer,
            total_amount,
        })
    }

    /// Flat line for file export: `id,name,units,amount` with the amount at
    /// two decimals. The name is written verbatim; a comma inside it is not
    /// escaped (known limitation of the record layout).
    pub fn export_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.consumer.id,
            self.consumer.name,
            self.consumer.units,
            format_amount(self.total_amount)
        )
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Electricity Bill -----")?;
        writeln!(f, "Consumer ID   : {}", self.consumer.id)?;
        writeln!(f, "Consumer Name : {}", self.consumer.name)?;
        writeln!(f, "Units Consumed: {}", self.consumer.units)?;
        writeln!(
            f,
            "Total Amount  : Rs. {}",
            format_amount(self.total_amount)
        )?;
        write!(f, "----------------------------")
    }
}
