use std::fmt;

/// Distance covered by a route, in whole kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_km(km: u64) -> Self {
        Self(km)
    }

    pub const fn km(&self) -> u64 {
        self.0
    }

    /// Sums saturate at `Distance::MAX` instead of overflowing.
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KM", self.0)
    }
}
