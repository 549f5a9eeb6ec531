use crate::core::precision::CoordinatePrecision;
use crate::util::error::ParseError;
use crate::util::parse::{Notation, parse_coordinate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An immutable USNG/MGRS grid coordinate.
///
/// A coordinate always carries a zone number and latitude band, and may
/// carry a 100km grid square and easting/northing values down to 1 meter
/// resolution. The precision tier is derived at construction from which
/// parts are present and how many digits the numeric parts carry; it is
/// never set independently.
///
/// Values are constructed by parsing text or through the factory
/// functions, and are immutable afterwards. Equality and hashing cover
/// every field, so two coordinates that render identically compare equal
/// and can be used as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    zone_number: u8,
    latitude_band: char,
    grid_square: Option<GridSquare>,
    east_north: Option<EastNorth>,
    precision: CoordinatePrecision,
}

/// The two-letter 100km grid square identifier. Column and row always
/// travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct GridSquare {
    column: char,
    row: char,
}

/// Easting/northing within a 100km grid square. Only present when the
/// grid square letters are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct EastNorth {
    easting: u32,
    northing: u32,
}

impl GridCoordinate {
    /// Creates a zone/band-only coordinate (6° by 8° precision).
    ///
    /// `zone_number` must be 1-60 and `latitude_band` one of the 20 valid
    /// band letters; structured construction does not re-validate what
    /// the type contracts of the producing converter already guarantee.
    pub fn from_zone_band(zone_number: u8, latitude_band: char) -> Self {
        Self {
            zone_number,
            latitude_band,
            grid_square: None,
            east_north: None,
            precision: CoordinatePrecision::SixByEightDegrees,
        }
    }

    /// Creates a coordinate at 100km grid square precision.
    pub fn from_grid_square(zone_number: u8, latitude_band: char, column: char, row: char) -> Self {
        Self {
            grid_square: Some(GridSquare { column, row }),
            precision: CoordinatePrecision::OneHundredKilometers,
            ..Self::from_zone_band(zone_number, latitude_band)
        }
    }

    /// Creates a fully specified coordinate, deriving the precision tier
    /// from the decimal digit count of the wider of the two values.
    ///
    /// # Example
    /// ```
    /// use usng_rs::{CoordinatePrecision, GridCoordinate};
    ///
    /// let coord = GridCoordinate::from_east_north(18, 'S', 'U', 'J', 23480, 6712);
    /// assert_eq!(coord.precision(), CoordinatePrecision::OneMeter);
    /// assert_eq!(coord.to_usng(), "18S UJ 23480 06712");
    /// ```
    pub fn from_east_north(
        zone_number: u8,
        latitude_band: char,
        column: char,
        row: char,
        easting: u32,
        northing: u32,
    ) -> Self {
        Self {
            east_north: Some(EastNorth { easting, northing }),
            precision: CoordinatePrecision::for_east_north(easting, northing),
            ..Self::from_grid_square(zone_number, latitude_band, column, row)
        }
    }

    /// Creates a fully specified coordinate with an explicit digit width.
    ///
    /// Use this instead of [`from_east_north`](Self::from_east_north)
    /// when the original notation is known to have carried leading zeros,
    /// which widen the precision beyond what the values alone imply.
    pub fn from_east_north_with_width(
        zone_number: u8,
        latitude_band: char,
        column: char,
        row: char,
        easting: u32,
        northing: u32,
        digit_width: usize,
    ) -> Self {
        Self {
            east_north: Some(EastNorth { easting, northing }),
            precision: CoordinatePrecision::for_digit_width(digit_width),
            ..Self::from_grid_square(zone_number, latitude_band, column, row)
        }
    }

    /// Parses a grid coordinate string in the given notation.
    pub fn parse(input: &str, notation: Notation) -> Result<Self, ParseError> {
        parse_coordinate(input, notation)
    }

    /// Parses a space-delimited USNG string.
    ///
    /// # Example
    /// ```
    /// use usng_rs::GridCoordinate;
    ///
    /// # fn main() -> Result<(), usng_rs::ParseError> {
    /// let coord = GridCoordinate::parse_usng("18S UJ 23480 06712")?;
    /// assert_eq!(coord.to_mgrs(), "18SUJ2348006712");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_usng(input: &str) -> Result<Self, ParseError> {
        parse_coordinate(input, Notation::Usng)
    }

    /// Parses an unspaced MGRS string.
    ///
    /// # Example
    /// ```
    /// use usng_rs::GridCoordinate;
    ///
    /// # fn main() -> Result<(), usng_rs::ParseError> {
    /// let coord = GridCoordinate::parse_mgrs("18SUJ2348006712")?;
    /// assert_eq!(coord.to_usng(), "18S UJ 23480 06712");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_mgrs(input: &str) -> Result<Self, ParseError> {
        parse_coordinate(input, Notation::Mgrs)
    }

    /// Renders this coordinate in the given notation.
    ///
    /// Feeding the output back to [`parse`](Self::parse) with the same
    /// notation reproduces an equal coordinate.
    pub fn format(&self, notation: Notation) -> String {
        match notation {
            Notation::Usng => self.render(true),
            Notation::Mgrs => self.render(false),
        }
    }

    /// Renders this coordinate as a space-delimited USNG string.
    pub fn to_usng(&self) -> String {
        self.render(true)
    }

    /// Renders this coordinate as an unspaced MGRS string.
    pub fn to_mgrs(&self) -> String {
        self.render(false)
    }

    fn render(&self, include_spaces: bool) -> String {
        let mut out = format!("{}{}", self.zone_number, self.latitude_band);

        if let Some(square) = &self.grid_square {
            if include_spaces {
                out.push(' ');
            }
            out.push(square.column);
            out.push(square.row);

            if let Some(east_north) = &self.east_north {
                if include_spaces {
                    out.push(' ');
                }
                out.push_str(&self.precision.format_value(east_north.easting));
                if include_spaces {
                    out.push(' ');
                }
                out.push_str(&self.precision.format_value(east_north.northing));
            }
        }

        out
    }

    /// The UTM zone number, 1-60.
    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    /// The latitude band letter, C-X excluding I and O.
    pub fn latitude_band(&self) -> char {
        self.latitude_band
    }

    /// The 100km grid square column letter, if present.
    pub fn column_letter(&self) -> Option<char> {
        self.grid_square.map(|square| square.column)
    }

    /// The 100km grid square row letter, if present.
    pub fn row_letter(&self) -> Option<char> {
        self.grid_square.map(|square| square.row)
    }

    /// The easting within the grid square, if present.
    pub fn easting(&self) -> Option<u32> {
        self.east_north.map(|east_north| east_north.easting)
    }

    /// The northing within the grid square, if present.
    pub fn northing(&self) -> Option<u32> {
        self.east_north.map(|east_north| east_north.northing)
    }

    /// The precision tier this coordinate is specified to.
    pub fn precision(&self) -> CoordinatePrecision {
        self.precision
    }
}

impl std::fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_usng())
    }
}

impl FromStr for GridCoordinate {
    type Err = ParseError;

    /// Parses in USNG notation, matching what `Display` renders.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_usng(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_band_renders_identically_in_both_notations() {
        let coord = GridCoordinate::from_zone_band(18, 'S');

        assert_eq!(coord.to_usng(), "18S");
        assert_eq!(coord.to_mgrs(), "18S");
        assert_eq!(coord.precision(), CoordinatePrecision::SixByEightDegrees);
    }

    #[test]
    fn test_grid_square_rendering() {
        let coord = GridCoordinate::from_grid_square(18, 'S', 'U', 'J');

        assert_eq!(coord.to_usng(), "18S UJ");
        assert_eq!(coord.to_mgrs(), "18SUJ");
        assert_eq!(coord.precision(), CoordinatePrecision::OneHundredKilometers);
    }

    #[test]
    fn test_full_precision_rendering_pads_northing() {
        let coord = GridCoordinate::from_east_north(18, 'S', 'U', 'J', 23480, 6712);

        assert_eq!(coord.to_usng(), "18S UJ 23480 06712");
        assert_eq!(coord.to_mgrs(), "18SUJ2348006712");
    }

    #[test]
    fn test_explicit_width_overrides_magnitude() {
        let coord = GridCoordinate::from_east_north_with_width(18, 'S', 'U', 'J', 2, 0, 5);

        assert_eq!(coord.precision(), CoordinatePrecision::OneMeter);
        assert_eq!(coord.to_usng(), "18S UJ 00002 00000");
    }

    #[test]
    fn test_format_matches_shorthands() {
        let coord = GridCoordinate::from_east_north(1, 'C', 'A', 'A', 5, 5);

        assert_eq!(coord.format(Notation::Usng), coord.to_usng());
        assert_eq!(coord.format(Notation::Mgrs), coord.to_mgrs());
    }

    #[test]
    fn test_display_and_from_str_round_trip() -> Result<(), ParseError> {
        let coord = GridCoordinate::from_east_north(18, 'S', 'U', 'J', 23480, 6712);
        let restored: GridCoordinate = coord.to_string().parse()?;

        assert_eq!(coord, restored);
        Ok(())
    }

    #[test]
    fn test_accessors() {
        let coord = GridCoordinate::from_east_north(18, 'S', 'U', 'J', 23480, 6712);

        assert_eq!(coord.zone_number(), 18);
        assert_eq!(coord.latitude_band(), 'S');
        assert_eq!(coord.column_letter(), Some('U'));
        assert_eq!(coord.row_letter(), Some('J'));
        assert_eq!(coord.easting(), Some(23480));
        assert_eq!(coord.northing(), Some(6712));
    }

    #[test]
    fn test_equality_includes_precision() {
        let narrow = GridCoordinate::from_east_north_with_width(18, 'S', 'U', 'J', 23, 6, 2);
        let wide = GridCoordinate::from_east_north_with_width(18, 'S', 'U', 'J', 23, 6, 5);

        assert_ne!(narrow, wide);
    }
}
