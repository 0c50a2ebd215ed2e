//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
pub const MIN_PASSWORD_LENGTH: usize = 10;
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 8 * 1024 * 1024;
pub const MAX_FILENAME_LENGTH: usize = 120;
pub const REVIEW_LIST_LIMIT: usize = 1000;
pub const COLLECTION_LIST_LIMIT: usize = 100;
pub const DEFAULT_BESTSELLER_LIMIT: usize = 10;
