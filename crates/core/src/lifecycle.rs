//! Deletion-request lifecycle rules.
//!
//! The request state machine is driven by checklist progress: completing
//! or un-completing steps recomputes the status from the completed-step
//! count. Explicit status edits (submit, reject, action-required) come in
//! through the API as direct overwrites and are handled by the repository
//! layer; the pure rules live here so they can be unit tested.

use crate::status::{PlatformStatus, RequestStatus};

/// Compute the request status implied by checklist progress.
///
/// - no steps completed  → `pending`
/// - some steps completed → `in_progress`
/// - all steps completed  → `completed`
///
/// An empty checklist never reports `completed`; a request with no steps
/// stays `pending` until explicitly marked.
pub fn status_for_step_count(completed: usize, total: usize) -> RequestStatus {
    if completed == 0 || total == 0 {
        RequestStatus::Pending
    } else if completed < total {
        RequestStatus::InProgress
    } else {
        RequestStatus::Completed
    }
}

/// Whether a status edit into `new_status` should stamp `submitted_at`.
///
/// Only the transition into `submitted` sets the timestamp, and only when
/// it has not been set before (re-submitting keeps the original time).
pub fn stamps_submitted_at(new_status: RequestStatus, already_submitted: bool) -> bool {
    new_status == RequestStatus::Submitted && !already_submitted
}

/// Whether `completed_at` must be populated for the given status.
///
/// The invariant is bidirectional: `completed_at` is set if and only if
/// the request is in `completed`.
pub fn carries_completed_at(status: RequestStatus) -> bool {
    status == RequestStatus::Completed
}

/// Map a request status to the per-user platform status cache.
///
/// The cache is coarser than the request lifecycle: every open state
/// shows as `in_progress` on the dashboard, `action_required` passes
/// through, and both terminal states show as `completed` (a rejected
/// request is over either way).
pub fn platform_status_for(status: RequestStatus) -> PlatformStatus {
    match status {
        RequestStatus::Pending
        | RequestStatus::Submitted
        | RequestStatus::InProgress => PlatformStatus::InProgress,
        RequestStatus::ActionRequired => PlatformStatus::ActionRequired,
        RequestStatus::Completed | RequestStatus::Rejected => PlatformStatus::Completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_completed_is_pending() {
        assert_eq!(status_for_step_count(0, 6), RequestStatus::Pending);
    }

    #[test]
    fn test_partial_completion_is_in_progress() {
        assert_eq!(status_for_step_count(1, 6), RequestStatus::InProgress);
        assert_eq!(status_for_step_count(5, 6), RequestStatus::InProgress);
        assert_eq!(status_for_step_count(10, 11), RequestStatus::InProgress);
    }

    #[test]
    fn test_full_completion_is_completed() {
        assert_eq!(status_for_step_count(6, 6), RequestStatus::Completed);
        assert_eq!(status_for_step_count(11, 11), RequestStatus::Completed);
    }

    #[test]
    fn test_empty_checklist_stays_pending() {
        assert_eq!(status_for_step_count(0, 0), RequestStatus::Pending);
    }

    #[test]
    fn test_submitted_at_stamped_once() {
        assert!(stamps_submitted_at(RequestStatus::Submitted, false));
        assert!(!stamps_submitted_at(RequestStatus::Submitted, true));
        assert!(!stamps_submitted_at(RequestStatus::Completed, false));
    }

    #[test]
    fn test_platform_cache_collapses_open_states() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Submitted,
            RequestStatus::InProgress,
        ] {
            assert_eq!(platform_status_for(status), PlatformStatus::InProgress);
        }
        assert_eq!(
            platform_status_for(RequestStatus::ActionRequired),
            PlatformStatus::ActionRequired
        );
        assert_eq!(
            platform_status_for(RequestStatus::Completed),
            PlatformStatus::Completed
        );
        assert_eq!(
            platform_status_for(RequestStatus::Rejected),
            PlatformStatus::Completed
        );
    }

    #[test]
    fn test_completed_at_only_for_completed() {
        assert!(carries_completed_at(RequestStatus::Completed));
        for status in [
            RequestStatus::Pending,
            RequestStatus::Submitted,
            RequestStatus::InProgress,
            RequestStatus::Rejected,
            RequestStatus::ActionRequired,
        ] {
            assert!(!carries_completed_at(status));
        }
    }
}
