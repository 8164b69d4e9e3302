//! Score types shared across the intelligence modules.

use serde::{Deserialize, Serialize};

/// Rounds `value` to `places` decimal places, sending halves to the even neighbour.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Leadership Potential Index, clamped to [0.0, 10.0] and rounded to 2 decimals.
///
/// # Examples
///
/// ```
/// use pathfinder_intelligence::Lpi;
///
/// assert_eq!(Lpi::new(7.256).value(), 7.26);
/// assert_eq!(Lpi::new(12.0).value(), 10.0);
/// assert_eq!(Lpi::new(-1.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lpi(f64);

impl Lpi {
    /// Upper bound of the index.
    pub const MAX: f64 = 10.0;

    /// Create a new index value, clamping to [0.0, 10.0] then rounding.
    #[must_use]
    pub fn new(raw: f64) -> Self {
        Self(round_to(raw.clamp(0.0, Self::MAX), 2))
    }

    /// Get the inner value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Lpi {
    fn default() -> Self {
        Self(0.0)
    }
}

impl From<Lpi> for f64 {
    fn from(lpi: Lpi) -> Self {
        lpi.0
    }
}

impl std::fmt::Display for Lpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
