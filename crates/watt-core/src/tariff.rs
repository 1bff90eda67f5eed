use crate::error::BillingError;

/// Flat meter charge added to every bill regardless of consumption.
pub const METER_CHARGE: f64 = 50.0;

/// One contiguous range of consumption units billed at a single rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Highest unit covered by this tier; `None` for the open-ended top tier.
    pub upto: Option<i64>,
    /// Rate per unit inside this tier.
    pub rate: f64,
}

/// The tier table. Process-wide constant, never changes at runtime.
const TIERS: [Tier; 4] = [
    Tier {
        upto: Some(100),
        rate: 1.5,
    },
    Tier {
        upto: Some(300),
        rate: 2.5,
    },
    Tier {
        upto: Some(500),
        rate: 4.0,
    },
    Tier {
        upto: None,
        rate: 6.0,
    },
];

/// The progressive rate schedule, for display.
pub fn tiers() -> &'static [Tier] {
    &TIERS
}

/// Compute the charge for `units` of consumption.
///
/// Progressive: the rate of a tier applies only to the units falling inside
/// it, prior tiers are billed at their own rate, and the flat meter charge
/// is added on top. Negative `units` is rejected, never clamped.
pub fn calculate(units: i64) -> Result<f64, BillingError> {
    if units < 0 {
        return Err(BillingError::InvalidInput(format!(
            "units consumed must be >= 0, got {units}"
        )));
    }

    let mut amount = 0.0;
    let mut floor = 0i64;
    for tier in &TIERS {
        let billed = match tier.upto {
            Some(upper) => (units.min(upper) - floor).max(0),
            None => (units - floor).max(0),
        };
        amount += billed as f64 * tier.rate;
        if let Some(upper) = tier.upto {
            floor = upper;
        }
    }

    Ok(amount + METER_CHARGE)
}

/// Fixed 2-decimal rendering for display and export. Stored amounts keep
/// full precision; only presentation rounds.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
