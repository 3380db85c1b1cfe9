//! Period-after-opening (PAO) expiry for opened products.
//!
//! A PAO month is a fixed 30 days. That is a deliberate simplification,
//! matching how the figure is printed on packaging, not a calendar
//! computation; a "6M" jar opened on any date is good for 180 days.

use super::CoreError;

/// Days of remaining life under which a product counts as running low.
const LOW_THRESHOLD_DAYS: f64 = 30.0;

const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryTier {
    Fresh,
    Low,
    Expired,
}

impl ExpiryTier {
    pub fn css_class(self) -> &'static str {
        match self {
            ExpiryTier::Fresh => "shelf-ring--fresh",
            ExpiryTier::Low => "shelf-ring--low",
            ExpiryTier::Expired => "shelf-ring--expired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpiryStatus {
    /// Remaining life as a fraction of the full PAO window, in [0, 1].
    pub remaining_fraction: f64,
    pub tier: ExpiryTier,
    /// Whole days of life remaining (0 once expired).
    pub remaining_days: u32,
    /// Rounded months remaining, floored at 0 for display.
    pub months_left: u32,
}

/// Compute remaining life for a product opened `days_open` days ago with
/// a PAO of `pao_months`.
pub fn compute(pao_months: f64, days_open: u32) -> Result<ExpiryStatus, CoreError> {
    if !pao_months.is_finite() || pao_months <= 0.0 {
        return Err(CoreError::InvalidArgument(format!(
            "PAO months must be positive and finite, got {pao_months}"
        )));
    }

    let total_days = pao_months * DAYS_PER_MONTH;
    let remaining_days = (total_days - f64::from(days_open)).max(0.0);
    let remaining_fraction = (remaining_days / total_days).clamp(0.0, 1.0);

    let tier = if remaining_days <= 0.0 {
        ExpiryTier::Expired
    } else if remaining_days < LOW_THRESHOLD_DAYS {
        ExpiryTier::Low
    } else {
        ExpiryTier::Fresh
    };

    let months_left = (pao_months - f64::from(days_open) / DAYS_PER_MONTH)
        .round()
        .max(0.0) as u32;

    Ok(ExpiryStatus {
        remaining_fraction,
        tier,
        remaining_days: remaining_days.round() as u32,
        months_left,
    })
}
