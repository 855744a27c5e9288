// Input limits
pub const MAX_MESSAGE_CHARS: usize = 500;
pub const COUNTER_WARNING_RATIO: f32 = 0.8;

// Connection status polling
pub const HEALTH_CHECK_INTERVAL_SECS: u64 = 30;

// Reply shown in place of a response when the send fails
pub const FALLBACK_REPLY: &str = "Oops! Something went wrong. Please try again!";

// How long a toast notification stays on screen
pub const TOAST_DURATION_MS: u64 = 2000;

// Preset queries bound to function keys in the chat screen
pub const QUICK_QUERIES: &[(&str, &str)] = &[
    ("F2", "What can you help me with?"),
    ("F3", "Tell me about yourself"),
    ("F4", "How do I get started?"),
];

// API defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
