use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

/// Logs the crate's own records plus ntex's, which carries the access log
pub fn setup_simple_logger(level: LevelFilter) -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("pet_owners")
        .add_filter_allow_str("ntex")
        .build();

    Ok(SimpleLogger::init(level, logger_config)?)
}
