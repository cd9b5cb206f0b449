//! Errors of the CooLex station

/// Errors that can come up while loading data or preparing an order
#[derive(Debug, PartialEq)]
pub enum CooLexError {
    /// An ingredient did not have enough stock left for one use. Carries the ingredient name.
    InsufficientStock(String),
    /// A selection index was outside the bounds of the catalog
    IndexOutOfRange,
    /// The catalog or orders file could not be read or parsed
    FileReaderError,
}
