pub const BASE_API_URL: &str = "https://api.anthropic.com/";
pub const MESSAGES_PATH: &str = "v1/messages";

pub const ANTHROPIC_VERSION_HEADER: &str = "anthropic-version";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const API_KEY_HEADER: &str = "x-api-key";

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";
