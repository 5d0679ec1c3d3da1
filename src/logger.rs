use crate::config;
use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};
use std::str::FromStr;

pub fn setup_simple_logger() -> anyhow::Result<()> {
    let level = LevelFilter::from_str(&config::APP_CONFIG.loglevel).unwrap_or(LevelFilter::Info);

    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("sms_inbox")
        .build();

    Ok(SimpleLogger::init(level, logger_config)?)
}
