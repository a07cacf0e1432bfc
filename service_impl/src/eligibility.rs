use service::eligibility::EligibilityService;
use service::user_set::ReportUser;
use time::Date;

pub struct EligibilityServiceImpl;

impl EligibilityService for EligibilityServiceImpl {
    fn has_data_window(&self, user: &ReportUser, from: Date, to: Date) -> bool {
        if user.hired_at > to {
            return false;
        }
        match user.ended_at {
            Some(ended_at) => ended_at >= from,
            None => true,
        }
    }
}
