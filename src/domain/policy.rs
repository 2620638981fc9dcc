//! Validation threshold policy.
//!
//! All thresholds live in one injectable structure so that UI display text,
//! eligibility checks and auto-resolution agree on the same numbers.
//!
//! Counter semantics: `approve_count` and `reject_count` are independent
//! tallies; `validation_count` is maintained as their sum. Payment
//! eligibility reads the summed counter, auto-resolution reads the split
//! tallies.

use serde::{Deserialize, Serialize};

use crate::domain::trend::TrendStatus;

/// Fixed thresholds governing payment eligibility and auto-resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Community validations required before a submission earns out.
    pub required_validations_for_payment: i32,
    /// Approvals at which a submission is auto-approved.
    pub min_approvals_for_auto_approve: i32,
    /// Rejections at which a submission is auto-rejected.
    pub min_rejections_for_auto_reject: i32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            required_validations_for_payment: 2,
            min_approvals_for_auto_approve: 3,
            min_rejections_for_auto_reject: 3,
        }
    }
}

impl ValidationPolicy {
    /// True once the validation count reaches the payment threshold.
    ///
    /// Negative counts (possible with partially-loaded rows) behave as zero,
    /// so the function is total and monotonic in `validation_count`.
    pub fn is_eligible_for_payment(&self, validation_count: i32) -> bool {
        validation_count.max(0) >= self.required_validations_for_payment
    }

    /// Terminal status once a vote tally reaches its threshold, if any.
    ///
    /// Approval is checked first: reaching the approval threshold resolves
    /// the submission regardless of the rejection tally.
    pub fn auto_resolution(&self, approve_count: i32, reject_count: i32) -> Option<TrendStatus> {
        if approve_count.max(0) >= self.min_approvals_for_auto_approve {
            Some(TrendStatus::Approved)
        } else if reject_count.max(0) >= self.min_rejections_for_auto_reject {
            Some(TrendStatus::Rejected)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_eligibility_boundaries() {
        let policy = ValidationPolicy::default();
        assert!(!policy.is_eligible_for_payment(0));
        assert!(!policy.is_eligible_for_payment(1));
        assert!(policy.is_eligible_for_payment(2));
        assert!(policy.is_eligible_for_payment(3));
        assert!(policy.is_eligible_for_payment(i32::MAX));
    }

    #[test]
    fn negative_counts_behave_as_zero() {
        let policy = ValidationPolicy::default();
        assert!(!policy.is_eligible_for_payment(-1));
        assert!(!policy.is_eligible_for_payment(i32::MIN));
        assert_eq!(policy.auto_resolution(-5, -5), None);
    }

    #[test]
    fn auto_approve_triggers_at_threshold_regardless_of_rejections() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.auto_resolution(2, 0), None);
        assert_eq!(policy.auto_resolution(3, 0), Some(TrendStatus::Approved));
        assert_eq!(policy.auto_resolution(3, 99), Some(TrendStatus::Approved));
        assert_eq!(policy.auto_resolution(4, 3), Some(TrendStatus::Approved));
    }

    #[test]
    fn auto_reject_triggers_at_threshold() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.auto_resolution(0, 2), None);
        assert_eq!(policy.auto_resolution(0, 3), Some(TrendStatus::Rejected));
        assert_eq!(policy.auto_resolution(2, 5), Some(TrendStatus::Rejected));
    }

    #[test]
    fn eligibility_is_monotonic() {
        let policy = ValidationPolicy::default();
        let mut previously_eligible = false;
        for count in -3..10 {
            let eligible = policy.is_eligible_for_payment(count);
            assert!(!previously_eligible || eligible, "flipped back at {count}");
            previously_eligible = eligible;
        }
    }
}
