/// Cloudflare API base URL.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Legacy authentication headers (lowercase for `HeaderName::from_static`).
pub const AUTH_KEY_HEADER: &str = "x-auth-key";
pub const AUTH_EMAIL_HEADER: &str = "x-auth-email";

/// The managed record is always an address record.
pub const RECORD_TYPE: &str = "A";
