/// Settings for a collection run, resolved from `UPROFILE_*` env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Platform origin every request is built against, e.g. `https://www.reddit.com`.
    pub base_url: String,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Pause applied after each posts/comments listing fetch.
    pub request_pause_ms: u64,
    pub posts_limit: u32,
    pub comments_limit: u32,
}
