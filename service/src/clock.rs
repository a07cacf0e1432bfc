use mockall::automock;

#[automock]
pub trait ClockService {
    fn now_utc(&self) -> time::OffsetDateTime;
}
