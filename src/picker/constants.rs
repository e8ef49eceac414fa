//! Timing and layout constants for the picker.

// Timing constants
/// Minimum characters before a query is issued
pub const DEFAULT_MIN_INPUT_LENGTH: usize = 3;

/// Debounce delay between the last keystroke and the query, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 220;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Remote request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// UI layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the action bar component
pub const ACTION_BAR_HEIGHT: u16 = 3;

/// Width of the fixed preview column in a result row
pub const PREVIEW_COLUMN_WIDTH: usize = 6;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Caching
/// Number of distinct query terms kept in the result cache
pub const QUERY_CACHE_SIZE: usize = 64;
