//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 10-19   | import           | File parsing and normalization           |
//! | 20-29   | hub              | Remote hub / reconciliation store        |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Import (10-19)
// =============================================================================

/// Input file unreadable: missing file, no worksheet, malformed content.
pub const EXIT_IMPORT_PARSE: u8 = 10;

/// Nothing to import: no data rows, or every row blank after
/// normalization. The hub is never contacted in this case.
pub const EXIT_IMPORT_EMPTY: u8 = 11;

// =============================================================================
// Hub (20-29)
// =============================================================================

/// A hub call failed (network or server error). The working set keeps
/// its last-known-good contents.
pub const EXIT_HUB_REMOTE: u8 = 20;

/// The hub rejected the request (validation error with a message).
pub const EXIT_HUB_VALIDATION: u8 = 21;

/// The given identity names no record in the working set.
pub const EXIT_HUB_UNKNOWN_ID: u8 = 22;
