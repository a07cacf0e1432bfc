use async_trait::async_trait;
use mockall::automock;

use crate::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Fixed UTC offset of the deployment's reference timezone.
    pub reference_offset: time::UtcOffset,
    /// Upper bound for `per_page` on paged reports.
    pub max_page_size: usize,
    /// Threshold for the "full day or more" summary count.
    pub full_day_hours: f32,
    /// Single-interval duration above which an NSH record is counted as
    /// needing review.
    pub nsh_review_hours: f32,
}

#[automock]
#[async_trait]
pub trait ConfigService {
    async fn get_config(&self) -> Result<Config, ServiceError>;
}
