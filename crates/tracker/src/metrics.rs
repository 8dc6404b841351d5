#[derive(Debug, Clone)]
pub(crate) struct Metrics;

impl Metrics {
    pub(crate) const TRACKER_HEADS_SAVED_TOTAL: &'static str = "chaintip_tracker_heads_saved_total";
    pub(crate) const TRACKER_SAVES_INTERRUPTED_TOTAL: &'static str =
        "chaintip_tracker_saves_interrupted_total";
    pub(crate) const TRACKER_HEADS_TRIMMED_TOTAL: &'static str =
        "chaintip_tracker_heads_trimmed_total";
    pub(crate) const TRACKER_HIGHEST_SEEN_HEAD: &'static str = "chaintip_tracker_highest_seen_head";

    pub(crate) fn init() {
        Self::describe();
        Self::zero();
    }

    fn describe() {
        metrics::describe_counter!(
            Self::TRACKER_HEADS_SAVED_TOTAL,
            metrics::Unit::Count,
            "Total number of heads durably saved by the tracker",
        );

        metrics::describe_counter!(
            Self::TRACKER_SAVES_INTERRUPTED_TOTAL,
            metrics::Unit::Count,
            "Total number of saves abandoned by caller cancellation after the write attempt",
        );

        metrics::describe_counter!(
            Self::TRACKER_HEADS_TRIMMED_TOTAL,
            metrics::Unit::Count,
            "Total number of heads deleted by history trimming",
        );

        metrics::describe_gauge!(
            Self::TRACKER_HIGHEST_SEEN_HEAD,
            metrics::Unit::Count,
            "Block number of the highest head seen by the tracker",
        );
    }

    fn zero() {
        metrics::counter!(Self::TRACKER_HEADS_SAVED_TOTAL).increment(0);
        metrics::counter!(Self::TRACKER_SAVES_INTERRUPTED_TOTAL).increment(0);
        metrics::counter!(Self::TRACKER_HEADS_TRIMMED_TOTAL).increment(0);
        metrics::gauge!(Self::TRACKER_HIGHEST_SEEN_HEAD).set(0.0);
    }
}
