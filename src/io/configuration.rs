//! Input constants and runtime configuration defaults

// Block extents are entered one keystroke at a time
/// Smallest accepted block extent
pub const MIN_DIGIT: usize = 1;
/// Largest accepted block extent
pub const MAX_DIGIT: usize = 9;

/// Number of partition phases shown to the operator (columns, then rows)
pub const PHASE_COUNT: usize = 2;

/// Characters treated as an undo keystroke (minus, `u`, backspace, delete)
pub const UNDO_KEYS: [char; 4] = ['-', 'u', '\u{8}', '\u{7f}'];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_reduced";
/// Extension of the reduced image, which selects the encoder
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of the completion bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log level used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
