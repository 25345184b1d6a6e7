//! Range-clamped metric values.
//!
//! Every simulated field carries its own `[min, max]`. Writes clamp into
//! the range; values never wrap and non-finite writes are ignored.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range for a metric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct FieldRange {
    pub min: f32,
    pub max: f32,
}

impl FieldRange {
    pub const fn new(min: f32, max: f32) -> Self {
        assert!(min <= max, "FieldRange min must not exceed max");
        Self { min, max }
    }

    /// Build a range at runtime, rejecting inverted or non-finite bounds.
    pub fn checked(min: f32, max: f32) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

}

#[derive(Deserialize)]
struct RawRange {
    min: f32,
    max: f32,
}

impl TryFrom<RawRange> for FieldRange {
    type Error = String;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        FieldRange::checked(raw.min, raw.max)
            .ok_or_else(|| format!("invalid range [{}, {}]", raw.min, raw.max))
    }
}

/// A metric value pinned inside its [`FieldRange`].
///
/// Deserialized values pass through [`Bounded::new`], so stored data
/// outside its range is clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounded")]
pub struct Bounded {
    value: f32,
    range: FieldRange,
}

impl Bounded {
    /// Create a value, clamping it into `range`. Non-finite input starts at `range.min`.
    pub fn new(value: f32, range: FieldRange) -> Self {
        let value = if value.is_finite() {
            range.clamp(value)
        } else {
            range.min
        };
        Self { value, range }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> FieldRange {
        self.range
    }

    /// Overwrite the value, clamped. Non-finite writes leave it unchanged.
    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = self.range.clamp(value);
        }
    }

    /// Shift by `delta` and clamp.
    pub fn nudge(&mut self, delta: f32) {
        self.set(self.value + delta);
    }
}

#[derive(Deserialize)]
struct RawBounded {
    value: f32,
    range: FieldRange,
}

impl From<RawBounded> for Bounded {
    fn from(raw: RawBounded) -> Self {
        Bounded::new(raw.value, raw.range)
    }
}
