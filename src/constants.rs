// src/constants.rs
//! Domain constants that define the operational boundaries of the server.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Default root of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header on every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while walking block children.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Seconds a single Notion call may take before it is abandoned.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Search boundaries
// ---------------------------------------------------------------------------

/// Number of results returned when the caller does not pass a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on results a single search may return.
///
/// Larger limits are clamped rather than rejected.
pub const SEARCH_MAX_RESULTS: usize = 100;

// ---------------------------------------------------------------------------
// Article boundaries
// ---------------------------------------------------------------------------

/// Maximum depth of nested blocks fetched for one article.
///
/// Children below this depth are not requested; their parents render
/// without them.
pub const ARTICLE_MAX_NESTING_DEPTH: u8 = 12;

/// Number of spaces per nesting level in markdown and text output.
pub const INDENT_SPACES: usize = 2;

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
