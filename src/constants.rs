// Default values for the session panel - these are the single source of truth for defaults
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_LOG_LIMIT: usize = 20;

// User-facing messages
pub const MSG_EMPTY_SESSION_KEY: &str = "Enter a session key!";
pub const MSG_UNKNOWN_STATUS: &str = "unknown";

// Element ids shared with the server-rendered markup
pub const ID_SESSION_KEY_INPUT: &str = "sessionKeyInput";
pub const ID_SESSION_STATUS_BOX: &str = "sessionStatusBox";
pub const ID_TOKEN_TYPE: &str = "tokenType";
pub const ID_TOKEN_FILE: &str = "tokenFile";
pub const ID_ACCESS_TOKEN: &str = "accessToken";
pub const ID_MULTI_TOKEN_GROUP: &str = "multiTokenFile";
pub const ID_ACCESS_TOKEN_GROUP: &str = "accessTokenField";
pub const ID_THREAD_ID: &str = "threadId";
pub const ID_SENDER_NAME: &str = "kidx";
pub const ID_TIME_INTERVAL: &str = "time";
pub const ID_MESSAGE_FILE: &str = "txtFile";

// Buttons carrying this attribute dispatch the named session action on click
pub const ATTR_SESSION_ACTION: &str = "data-session-action";
