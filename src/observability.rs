use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// ReqRes API usage metrics
#[derive(Debug, Default)]
pub struct ApiMetrics {
    pub total_requests: AtomicU64,
    pub failed_steps: AtomicU64,
    pub skipped_verifications: AtomicU64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_step(&self) {
        self.failed_steps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped_verification(&self) {
        self.skipped_verifications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> ApiStats {
        ApiStats {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            failed_steps: self.failed_steps.load(Ordering::Relaxed),
            skipped_verifications: self.skipped_verifications.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "ReqRes API metrics: requests={}, failed_steps={}, skipped_verifications={}",
            stats.total_requests, stats.failed_steps, stats.skipped_verifications
        );
    }
}

#[derive(Debug, Clone)]
pub struct ApiStats {
    pub total_requests: u64,
    pub failed_steps: u64,
    pub skipped_verifications: u64,
}

/// Global metrics instance
static API_METRICS: std::sync::LazyLock<ApiMetrics> = std::sync::LazyLock::new(ApiMetrics::new);

pub fn api_metrics() -> &'static ApiMetrics {
    &API_METRICS
}

/// Time an operation and record its duration
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn finish(self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.operation,
            duration_ms = duration.as_millis(),
            "Operation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = ApiMetrics::new();
        metrics.record_request();
        metrics.record_request();
        metrics.record_failed_step();
        metrics.record_skipped_verification();

        let stats = metrics.get_stats();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.failed_steps, 1);
        assert_eq!(stats.skipped_verifications, 1);
    }
}
