use chrono::{Local, NaiveDate};

pub const EXPIRING_SOON_THRESHOLD_DAYS: i64 = 3;

/// Whole days from `today` until `expiry`. Zero or negative means expired or
/// expiring today. Dates are day-granular, so there is no partial-day
/// rounding to worry about.
pub fn remaining_days_on(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

pub fn remaining_days(expiry: NaiveDate) -> i64 {
    remaining_days_on(expiry, Local::now().date_naive())
}

/// Percentage of shelf life left, decaying linearly from 100 at production
/// to 0 at expiry, clamped to [0, 100]. A non-positive total span reads as
/// already expired, not as an error.
pub fn freshness_percent_on(production: NaiveDate, expiry: NaiveDate, today: NaiveDate) -> u8 {
    let total = (expiry - production).num_days();
    if total <= 0 {
        return 0;
    }
    let left = (expiry - today).num_days();
    (left.clamp(0, total) * 100 / total) as u8
}

pub fn freshness_percent(production: NaiveDate, expiry: NaiveDate) -> u8 {
    freshness_percent_on(production, expiry, Local::now().date_naive())
}

/// Expiring soon means strictly in the future but within the threshold.
/// Exactly-expired items are expired, never "soon".
pub fn is_expiring_soon_on(expiry: NaiveDate, today: NaiveDate, threshold_days: i64) -> bool {
    let remaining = remaining_days_on(expiry, today);
    remaining > 0 && remaining <= threshold_days
}

pub fn is_expiring_soon(expiry: NaiveDate) -> bool {
    is_expiring_soon_on(
        expiry,
        Local::now().date_naive(),
        EXPIRING_SOON_THRESHOLD_DAYS,
    )
}

pub fn is_expired_on(expiry: NaiveDate, today: NaiveDate) -> bool {
    remaining_days_on(expiry, today) <= 0
}

pub fn is_expired(expiry: NaiveDate) -> bool {
    is_expired_on(expiry, Local::now().date_naive())
}
