pub mod constants;
pub mod precision;

pub use constants::{
    COLUMN_LETTERS, LATITUDE_BAND_LETTERS, MAX_DIGIT_WIDTH, MAX_ZONE_NUMBER, MIN_ZONE_NUMBER,
    ROW_LETTERS,
};
pub use precision::CoordinatePrecision;
