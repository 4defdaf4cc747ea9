use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Logs go to stderr so stdout stays a clean JSON response channel.
pub fn init(debug_enabled: bool) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("pyvm")
        .build();

    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
