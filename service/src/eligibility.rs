use mockall::automock;

use crate::user_set::ReportUser;

/// Adjusted-start-date rule: whether a user's report window is expected to
/// contain data given their employment lifecycle. Keeps newly hired and
/// departed users from being flagged for days outside their employment.
#[automock]
pub trait EligibilityService {
    fn has_data_window(&self, user: &ReportUser, from: time::Date, to: time::Date) -> bool;
}
