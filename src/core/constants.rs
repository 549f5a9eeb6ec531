/// Valid latitude band letters, C through X excluding I and O
pub const LATITUDE_BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Valid 100km grid square column letters, A through Z excluding I and O
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Valid 100km grid square row letters, A through V excluding I and O
pub const ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";

/// Lowest valid UTM zone number
pub const MIN_ZONE_NUMBER: u8 = 1;

/// Highest valid UTM zone number
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Maximum number of easting/northing digits (1 meter resolution)
pub const MAX_DIGIT_WIDTH: usize = 5;
