mod copywriter;
mod health;
mod metrics;

pub use copywriter::copywriter_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
