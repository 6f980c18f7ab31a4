//! Query-string parsing helpers
//!
//! List endpoints take their filters as plain query parameters. Parsing is
//! lenient: a parameter that is empty or does not parse is treated as absent
//! rather than rejected, so it simply places no constraint on the listing.
//!
//! ```text
//! GET /books?author_id=3
//! GET /books?min_price=10&max_price=15
//! GET /books?max_price=12.5
//! ```

/// Inclusive numeric range; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Whether `value` satisfies both bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Parse an optional numeric query parameter.
///
/// Surrounding whitespace is ignored. Unparseable input yields `None`.
pub fn parse_number(param: &str, raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(param, value = raw, "ignoring non-numeric query parameter");
            None
        }
    }
}

/// Treat an empty string parameter as absent
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}
