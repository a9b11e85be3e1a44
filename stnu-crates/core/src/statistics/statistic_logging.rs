//! Writes statistics to stdout as `{prefix} {name}={value}` lines, followed by an optional closing
//! line.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are written once statistic logging has been configured.
#[derive(Debug, Clone, Copy)]
pub struct StatisticOptions {
    /// Starts every statistic line.
    pub statistic_prefix: &'static str,
    /// Written after a block of statistics by [`log_statistic_postfix`].
    pub after_statistics: Option<&'static str>,
    /// The casing applied to statistic names; names are written as given if `None`.
    pub statistics_casing: Option<Case>,
}

impl StatisticOptions {
    fn format_name(&self, name: impl Display) -> String {
        match self.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        }
    }
}

static STATISTIC_OPTIONS: OnceLock<StatisticOptions> = OnceLock::new();

/// Enables statistic logging with the given prefix, closing line and name casing.
///
/// Statistics are only written after this has been called. Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| StatisticOptions {
        statistic_prefix: prefix,
        after_statistics: after,
        statistics_casing: casing,
    });
}

/// Writes the statistic `name` with `value`, if statistic logging is configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };

    let name = options.format_name(name);
    if let Err(e) = writeln!(stdout().lock(), "{} {name}={value}", options.statistic_prefix) {
        debug!("Could not write statistic {name}: {e}");
    }
}

/// Writes the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    let Some(post_fix) = STATISTIC_OPTIONS
        .get()
        .and_then(|options| options.after_statistics)
    else {
        return;
    };

    if let Err(e) = writeln!(stdout().lock(), "{post_fix}") {
        debug!("Could not write the end of the statistics: {e}");
    }
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
