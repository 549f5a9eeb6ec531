use crate::api::GridCoordinate;
use crate::core::constants::{
    COLUMN_LETTERS, LATITUDE_BAND_LETTERS, MAX_ZONE_NUMBER, MIN_ZONE_NUMBER, ROW_LETTERS,
};
use crate::util::error::ParseError;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The two supported grid coordinate notations.
///
/// Both share one semantic grammar; they differ only in how the
/// easting/northing digits are tokenized. USNG separates every top-level
/// token with whitespace, MGRS runs the digits together in a single
/// contiguous run that is split evenly between easting and northing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notation {
    Usng,
    Mgrs,
}

static USNG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^([0-9]{{1,2}})([{LATITUDE_BAND_LETTERS}])\\W?([{COLUMN_LETTERS}][{ROW_LETTERS}])?(?:\\W([0-9]{{0,5}}))?(?:\\W([0-9]{{0,5}}))?$"
    ))
    .expect("USNG grammar is a valid regex")
});

static MGRS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^([0-9]{{1,2}})([{LATITUDE_BAND_LETTERS}])\\W?([{COLUMN_LETTERS}][{ROW_LETTERS}])?([0-9]{{0,10}})$"
    ))
    .expect("MGRS grammar is a valid regex")
});

/// Parses a grid coordinate string in the given notation.
///
/// Matching is case-insensitive and anchored; the whole trimmed string
/// must conform to the grammar.
///
/// # Example
/// ```
/// use usng_rs::{parse_coordinate, Notation};
///
/// # fn main() -> Result<(), usng_rs::ParseError> {
/// let coord = parse_coordinate("18s uj 23480 06712", Notation::Usng)?;
/// assert_eq!(coord.zone_number(), 18);
/// assert_eq!(coord.easting(), Some(23480));
/// # Ok(())
/// # }
/// ```
pub fn parse_coordinate(input: &str, notation: Notation) -> Result<GridCoordinate, ParseError> {
    let normalized = input.trim().to_uppercase();

    match notation {
        Notation::Usng => parse_usng(input, &normalized),
        Notation::Mgrs => parse_mgrs(input, &normalized),
    }
}

fn parse_usng(raw: &str, normalized: &str) -> Result<GridCoordinate, ParseError> {
    let caps = USNG_REGEX
        .captures(normalized)
        .ok_or_else(|| ParseError::new(raw, 0))?;

    if caps.get(3).is_none() {
        return assemble(raw, &caps, None);
    }

    let easting = caps.get(4).filter(|m| !m.as_str().is_empty());
    let northing = caps.get(5).filter(|m| !m.as_str().is_empty());

    match (easting, northing) {
        (Some(east), Some(north)) => {
            // Digit widths carry the precision, so they must agree.
            if east.as_str().len() != north.as_str().len() {
                return Err(ParseError::new(raw, north.start()));
            }
            assemble(raw, &caps, Some((east.as_str(), north.as_str())))
        }
        // A lone or empty run degrades to 100km precision.
        _ => assemble(raw, &caps, None),
    }
}

fn parse_mgrs(raw: &str, normalized: &str) -> Result<GridCoordinate, ParseError> {
    let caps = MGRS_REGEX
        .captures(normalized)
        .ok_or_else(|| ParseError::new(raw, 0))?;

    if caps.get(3).is_none() {
        return assemble(raw, &caps, None);
    }

    match caps.get(4).filter(|m| !m.as_str().is_empty()) {
        Some(run) => {
            let digits = run.as_str();
            if digits.len() % 2 != 0 {
                return Err(ParseError::new(raw, run.start()));
            }
            let (east, north) = digits.split_at(digits.len() / 2);
            assemble(raw, &caps, Some((east, north)))
        }
        None => assemble(raw, &caps, None),
    }
}

/// Builds a [`GridCoordinate`] from the matched components, inferring the
/// precision tier from which components are present and from the digit
/// width of the numeric runs.
fn assemble(
    raw: &str,
    caps: &Captures<'_>,
    runs: Option<(&str, &str)>,
) -> Result<GridCoordinate, ParseError> {
    let zone_number: u8 = caps[1].parse().map_err(|_| ParseError::new(raw, 0))?;
    if !(MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&zone_number) {
        return Err(ParseError::new(raw, 0));
    }

    let latitude_band = caps[2]
        .chars()
        .next()
        .ok_or_else(|| ParseError::new(raw, 0))?;

    let square = match caps.get(3) {
        Some(square) => {
            let mut letters = square.as_str().chars();
            let column = letters.next().ok_or_else(|| ParseError::new(raw, 0))?;
            let row = letters.next().ok_or_else(|| ParseError::new(raw, 0))?;
            Some((column, row))
        }
        None => None,
    };

    match (square, runs) {
        (None, _) => Ok(GridCoordinate::from_zone_band(zone_number, latitude_band)),
        (Some((column, row)), None) => Ok(GridCoordinate::from_grid_square(
            zone_number,
            latitude_band,
            column,
            row,
        )),
        (Some((column, row)), Some((east, north))) => {
            // Width is taken from the text before integer parsing so
            // leading zeros count toward the precision tier.
            let digit_width = east.len();
            let easting: u32 = east.parse().map_err(|_| ParseError::new(raw, 0))?;
            let northing: u32 = north.parse().map_err(|_| ParseError::new(raw, 0))?;

            Ok(GridCoordinate::from_east_north_with_width(
                zone_number,
                latitude_band,
                column,
                row,
                easting,
                northing,
                digit_width,
            ))
        }
    }
}
