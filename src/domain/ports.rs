use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Everything the API client needs to know to build its HTTP client.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;

    /// Per-request timeout. `None` leaves requests unbounded.
    fn timeout_seconds(&self) -> Option<u64> {
        None
    }

    /// Sent with every request, next to `Content-Type: application/json`.
    fn extra_headers(&self) -> &HashMap<String, String>;
}
