use metrics::counter;

/// Counters for board mutations and the failures clients see
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "kb_api" }
    }

    /// Record a committed mutation, e.g. `card_moved`
    pub fn mutation(&self, operation: &str) {
        counter!(format!("{}.mutations", self.prefix)).increment(1);
        counter!(format!("{}.mutations.{}", self.prefix, operation)).increment(1);
    }

    /// Record an error response by its code
    pub fn error_returned(&self, code: &str) {
        counter!(format!("{}.errors", self.prefix)).increment(1);
        match code {
            "ACCESS_DENIED" => counter!(format!("{}.access_denied", self.prefix)).increment(1),
            "CONCURRENCY_CONFLICT" => counter!(format!("{}.conflicts", self.prefix)).increment(1),
            _ => counter!(format!("{}.errors.{}", self.prefix, code.to_lowercase())).increment(1),
        }
    }

    /// Record an activity the sink failed to store
    pub fn activity_dropped(&self) {
        counter!(format!("{}.activity.dropped", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
