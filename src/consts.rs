//! Project-wide constants.

/// Default Gemini model when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Upper bound on matches kept from a single completion. The prompt asks
/// for at most this many; anything past it is dropped.
pub const MAX_MATCHES: usize = 5;

/// Default path of the offer dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/spare_capacity.csv";

/// Default address the web shell binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
