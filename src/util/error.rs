/// Error returned when a string does not conform to the USNG/MGRS grammar.
///
/// Carries the offending input and a byte offset into the normalized
/// (trimmed, upper-cased) string. The offset is 0 when the string fails
/// the grammar as a whole, and points at the numeric run when the runs
/// are present but unusable (mismatched widths, uneven MGRS split).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(input: &str, offset: usize) -> Self {
        Self {
            input: input.to_string(),
            offset,
        }
    }

    /// The input string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the failure within the normalized input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "supplied argument '{}' is not a valid USNG/MGRS formatted string (offset {})",
            self.input, self.offset
        )
    }
}

impl std::error::Error for ParseError {}
