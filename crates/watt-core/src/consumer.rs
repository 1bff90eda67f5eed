use crate::error::BillingError;
use serde::{Deserialize, Serialize};

/// A consumer identity as supplied at submission time.
///
/// Immutable once constructed. The id must be non-empty; uniqueness across
/// submissions is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    pub name: String,
    pub units: i64,
}

impl Consumer {
    /// Build a consumer identity.
    ///
    /// `units` is carried as given — a negative count is rejected by the
    /// tariff calculator, not clamped or filtered here.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        units: i64,
    ) -> Result<Self, BillingError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BillingError::InvalidInput(
                "consumer id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            units,
        })
    }
}
