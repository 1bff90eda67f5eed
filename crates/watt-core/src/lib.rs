pub mod bill;
pub mod consumer;
pub mod error;
pub mod tariff;

pub use bill::Bill;
pub use consumer::Consumer;
pub use error::BillingError;
pub use tariff::{calculate, format_amount, tiers, Tier, METER_CHARGE};
