use crate::core::constants::MAX_DIGIT_WIDTH;
use serde::{Deserialize, Serialize};

/// The resolution level a grid coordinate is specified to.
///
/// Variants are declared coarsest to finest, so `Ord` compares finer
/// precision as greater. The numeric tiers correspond to the number of
/// easting/northing digits a coordinate carries:
///
/// | Digits | Tier | Example |
/// |--------|------|---------|
/// | 1 | 10 km | `18S UJ 2 0` |
/// | 2 | 1 km | `18S UJ 23 06` |
/// | 3 | 100 m | `18S UJ 234 067` |
/// | 4 | 10 m | `18S UJ 2348 0671` |
/// | 5 | 1 m | `18S UJ 23480 06712` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoordinatePrecision {
    /// Zone number and latitude band only (a 6° by 8° cell).
    SixByEightDegrees,
    /// Zone, band, and 100km grid square letters, no digits.
    OneHundredKilometers,
    TenKilometers,
    OneKilometer,
    OneHundredMeters,
    TenMeters,
    OneMeter,
}

impl CoordinatePrecision {
    /// Resolves an easting/northing digit width to its precision tier.
    ///
    /// A width of 0 means grid square letters with no digits, which is the
    /// 100km tier. The zone/band tier is never produced here; it applies
    /// only when no grid square letters are present at all.
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds [`MAX_DIGIT_WIDTH`]. The parse grammar
    /// bounds numeric runs to 5 digits, so this is unreachable from
    /// parsing and indicates a caller bug.
    pub fn for_digit_width(width: usize) -> Self {
        match width {
            0 => Self::OneHundredKilometers,
            1 => Self::TenKilometers,
            2 => Self::OneKilometer,
            3 => Self::OneHundredMeters,
            4 => Self::TenMeters,
            5 => Self::OneMeter,
            _ => panic!("digit width {width} exceeds the maximum of {MAX_DIGIT_WIDTH}"),
        }
    }

    /// Resolves the precision tier for an easting/northing pair from the
    /// decimal digit count of the wider value.
    ///
    /// Intended for direct construction from already-resolved integers,
    /// where no textual digit width exists. `easting` and `northing` must
    /// each fit in 5 digits (0–99999).
    pub fn for_east_north(easting: u32, northing: u32) -> Self {
        Self::for_digit_width(digit_count(easting).max(digit_count(northing)))
    }

    /// The number of easting/northing digits this tier carries.
    ///
    /// Returns 0 for the two coarse tiers, which have no numeric part.
    pub fn digit_width(&self) -> usize {
        match self {
            Self::SixByEightDegrees | Self::OneHundredKilometers => 0,
            Self::TenKilometers => 1,
            Self::OneKilometer => 2,
            Self::OneHundredMeters => 3,
            Self::TenMeters => 4,
            Self::OneMeter => 5,
        }
    }

    /// Renders an easting or northing value zero-padded to exactly this
    /// tier's digit width.
    pub fn format_value(&self, value: u32) -> String {
        format!("{value:0width$}", width = self.digit_width())
    }

    /// The side length in meters of the cell this tier resolves to, or
    /// `None` for the zone/band tier (a 6° by 8° cell has no fixed
    /// metric size).
    pub fn cell_size_meters(&self) -> Option<u32> {
        match self {
            Self::SixByEightDegrees => None,
            Self::OneHundredKilometers => Some(100_000),
            Self::TenKilometers => Some(10_000),
            Self::OneKilometer => Some(1_000),
            Self::OneHundredMeters => Some(100),
            Self::TenMeters => Some(10),
            Self::OneMeter => Some(1),
        }
    }
}

fn digit_count(value: u32) -> usize {
    if value == 0 {
        1
    } else {
        (value.ilog10() + 1) as usize
    }
}
