use thiserror::Error;

pub mod permission;
pub mod project;
pub mod region;
pub mod report_category;
pub mod setting;
pub mod task;
pub mod user;
pub mod worklog;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] Box<dyn std::error::Error + Send + Sync>),
    #[error("Invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
    #[error("Cannot parse date or timestamp: {0}")]
    DateTimeParseError(#[from] time::error::Parse),
}
