//! Output rounding policy
//!
//! Every rounded field uses round-half-up: a value exactly halfway between
//! two candidates goes to the one nearer positive infinity (`2.5 -> 3`,
//! `-2.5 -> -2`). Intermediate arithmetic stays unrounded.

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can round up before the floor; `value - floor` is exact
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `digits` fractional digits, ties toward positive infinity
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    round_half_up(value * scale) / scale
}

/// Round to the nearest integer currency amount
pub fn round_to_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}
