#[cfg(test)]
pub mod category_map;
#[cfg(test)]
pub mod daily_performance;
#[cfg(test)]
pub mod user_set;
#[cfg(test)]
pub mod worklog;
