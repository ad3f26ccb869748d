use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("copywriter_requests_total", "Total number of requests").unwrap();
    pub static ref MODERATION_BLOCKED: Counter = register_counter!(
        "copywriter_moderation_blocked_total",
        "Requests blocked by the moderation pre-check"
    )
    .unwrap();
    pub static ref FAILED_REQUESTS: Counter = register_counter!(
        "copywriter_failed_requests_total",
        "Requests that ended in the generic failure response"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "copywriter_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
