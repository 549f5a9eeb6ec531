//! # usng-rs
//!
//! A bidirectional text codec for the USNG (United States National Grid)
//! and MGRS (Military Grid Reference System) coordinate notations. The
//! two notations share one structure; USNG separates tokens with spaces
//! while MGRS runs them together. A grid reference may legitimately stop
//! at the zone/band level, at the 100km grid square, or at any of five
//! easting/northing resolutions down to 1 meter, and round-trips are
//! lossless at whatever precision the input carried.
//!
//! There are two main entry points.
//!
//! ### 1. `GridCoordinate` - Parsing and formatting
//!
//! ```
//! use usng_rs::GridCoordinate;
//!
//! # fn main() -> Result<(), usng_rs::ParseError> {
//! let coord = GridCoordinate::parse_usng("18S UJ 23480 06712")?;
//! assert_eq!(coord.zone_number(), 18);
//! assert_eq!(coord.easting(), Some(23480));
//! assert_eq!(coord.to_mgrs(), "18SUJ2348006712");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CoordinatePrecision` - Resolution tiers
//!
//! ```
//! use usng_rs::{CoordinatePrecision, GridCoordinate};
//!
//! # fn main() -> Result<(), usng_rs::ParseError> {
//! let coord = GridCoordinate::parse_usng("18S UJ 23 06")?;
//! assert_eq!(coord.precision(), CoordinatePrecision::OneKilometer);
//! assert_eq!(coord.precision().cell_size_meters(), Some(1_000));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::GridCoordinate;
pub use crate::core::{
    COLUMN_LETTERS, CoordinatePrecision, LATITUDE_BAND_LETTERS, MAX_DIGIT_WIDTH, MAX_ZONE_NUMBER,
    MIN_ZONE_NUMBER, ROW_LETTERS,
};
pub use util::{Notation, ParseError, parse_coordinate};
