/// Application name
pub const APP_NAME: &str = "OA System";

/// Default REST API base path
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Envelope code signalling success
pub const SUCCESS_CODE: i32 = 200;

/// Envelope message used by the mock data source
pub const SUCCESS_MSG: &str = "Success";

/// Status filter sentinel meaning "no filter"
pub const STATUS_ALL: i32 = -1;

/// Role wildcard matching any authenticated user
pub const ROLE_WILDCARD: &str = "*";

/// Built-in role names
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Persisted client state keys
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_LANGUAGE: &str = "language";

/// Default page size used by list screens
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default number of notices shown on the dashboard
pub const DEFAULT_NOTICE_LIMIT: u32 = 5;

/// Default simulated latency of the mock data source, in milliseconds
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 300;

/// Default HTTP request timeout, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
