// =============================================================================
// Matchbook Backend Constants
// =============================================================================
// This file contains all constants used throughout the backend to enable
// easy tuning and configuration from a single location.

// =============================================================================
// PAGINATION
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of items per page (per_page is silently capped here)
pub const MAX_PAGE_SIZE: i64 = 50;

// =============================================================================
// POPULARITY CHECK
// =============================================================================

/// Minimum like count (exclusive) for a person to be reported as popular
pub const DEFAULT_POPULARITY_THRESHOLD: i64 = 50;

/// Default recipient of the popular-persons report
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@matchbook.app";

/// Default sender address for outgoing notifications
pub const DEFAULT_MAIL_FROM: &str = "noreply@matchbook.app";

// =============================================================================
// GUEST ACCOUNTS
// =============================================================================

/// Display-name prefix for auto-registered guests
pub const GUEST_NAME_PREFIX: &str = "Guest";

/// Random suffix length appended to guest display names
pub const GUEST_NAME_SUFFIX_LENGTH: usize = 8;

/// Length of the opaque bearer token issued to guests
pub const API_TOKEN_LENGTH: usize = 48;

// =============================================================================
// HTTP MESSAGES
// =============================================================================

/// Fixed 404 message for missing profiles (show/like/dislike alike)
pub const PERSON_NOT_FOUND_MESSAGE: &str = "Person not found";

// =============================================================================
// SERVER CONFIGURATION
// =============================================================================

/// Default server port if not specified in environment
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default SMTP port if not specified in environment
pub const DEFAULT_SMTP_PORT: u16 = 587;
