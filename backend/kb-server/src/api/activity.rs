//! Activity recording after a mutation has committed.

use crate::AppState;

use kb_core::Activity;

/// Append `activity` to the sink. Failures are logged and counted, never returned.
pub async fn record(state: &AppState, activity: Activity) {
    if let Err(e) = state.activity.append(&activity).await {
        state.metrics.activity_dropped();
        log::warn!(
            "Failed to record {} activity on board {}: {}",
            activity.type_tag(),
            activity.board_id,
            e
        );
    }
}
