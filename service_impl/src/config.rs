use std::env;

use async_trait::async_trait;
use service::config::{Config, ConfigService};
use service::ServiceError;
use tally_utils::date_utils::parse_utc_offset;
use tracing::warn;

pub struct ConfigServiceImpl;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Could not parse {}, falling back to default", name);
            default
        }),
        Err(_) => default,
    }
}

#[async_trait]
impl ConfigService for ConfigServiceImpl {
    async fn get_config(&self) -> Result<Config, ServiceError> {
        let reference_offset = match env::var("TIMEZONE_OFFSET") {
            Ok(raw) => parse_utc_offset(&raw).unwrap_or_else(|err| {
                warn!("Invalid TIMEZONE_OFFSET ({}), falling back to UTC", err);
                time::UtcOffset::UTC
            }),
            Err(_) => time::UtcOffset::UTC,
        };

        Ok(Config {
            reference_offset,
            max_page_size: env_or("MAX_PAGE_SIZE", 100),
            full_day_hours: env_or("FULL_DAY_HOURS", 8.0),
            nsh_review_hours: env_or("NSH_REVIEW_HOURS", 12.0),
        })
    }
}
