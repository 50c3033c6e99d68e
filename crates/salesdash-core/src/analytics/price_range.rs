/// A histogram bucket: `[min, next.min)`, unbounded when `max` is `None`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    /// Upper value shown in the label; membership is decided by the next
    /// range's `min`
    pub max: Option<f64>,
}

impl PriceRange {
    const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Display label such as `"101-200"` or `"901-above"`
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-above", self.min),
        }
    }
}

/// The ten fixed ranges, in display order
pub const PRICE_RANGES: [PriceRange; 10] = [
    PriceRange::bounded(0.0, 100.0),
    PriceRange::bounded(101.0, 200.0),
    PriceRange::bounded(201.0, 300.0),
    PriceRange::bounded(301.0, 400.0),
    PriceRange::bounded(401.0, 500.0),
    PriceRange::bounded(501.0, 600.0),
    PriceRange::bounded(601.0, 700.0),
    PriceRange::bounded(701.0, 800.0),
    PriceRange::bounded(801.0, 900.0),
    PriceRange {
        min: 901.0,
        max: None,
    },
];

/// Index of the range containing `price`
///
/// Picks the last range whose `min` does not exceed the price, so gaps such
/// as `100.50` fall in the lower range. Anything below zero (or NaN) lands in
/// the first range.
pub fn bucket_index(price: f64) -> usize {
    PRICE_RANGES
        .iter()
        .rposition(|range| price >= range.min)
        .unwrap_or(0)
}
