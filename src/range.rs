// Villain range selection: a single percentile in [1, 100].
//
// The value means "top N% of starting hands"; which hands that selects is
// entirely the backend's business.

/// A villain range percentile, clamped to [1, 100] at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePercent(u8);

impl RangePercent {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Clamp `value` into [1, 100]. Out-of-range input is clamped, never
    /// wrapped.
    pub fn new(value: u8) -> Self {
        RangePercent(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Step by `delta`, saturating at the bounds. Used for keyboard
    /// slider-style editing.
    pub fn adjust(self, delta: i16) -> Self {
        let next = (self.0 as i16 + delta).clamp(Self::MIN as i16, Self::MAX as i16);
        RangePercent(next as u8)
    }
}

impl Default for RangePercent {
    fn default() -> Self {
        RangePercent(15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_bounds() {
        assert_eq!(RangePercent::new(0).get(), 1);
        assert_eq!(RangePercent::new(1).get(), 1);
        assert_eq!(RangePercent::new(50).get(), 50);
        assert_eq!(RangePercent::new(100).get(), 100);
        assert_eq!(RangePercent::new(255).get(), 100);
    }

    #[test]
    fn default_is_fifteen() {
        assert_eq!(RangePercent::default().get(), 15);
    }

    #[test]
    fn adjust_saturates_at_bounds() {
        assert_eq!(RangePercent::new(1).adjust(-1).get(), 1);
        assert_eq!(RangePercent::new(1).adjust(-100).get(), 1);
        assert_eq!(RangePercent::new(100).adjust(1).get(), 100);
        assert_eq!(RangePercent::new(98).adjust(5).get(), 100);
        assert_eq!(RangePercent::new(15).adjust(5).get(), 20);
        assert_eq!(RangePercent::new(15).adjust(-5).get(), 10);
    }
}
