//! Stderr logging via `tracing-subscriber`.
//!
//! The filter comes from `QUICKUNION_LOG` (`EnvFilter` directive syntax,
//! default `warn`). `--verbose` and `--quiet` override it with `debug` and
//! `error` respectively.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "QUICKUNION_LOG";

/// Resolves the filter directives for the given verbosity flags.
fn directives(verbose: bool, quiet: bool, from_env: Option<String>) -> String {
    if verbose {
        "debug".to_owned()
    } else if quiet {
        "error".to_owned()
    } else {
        from_env.unwrap_or_else(|| "warn".to_owned())
    }
}

/// Builds the filter for `wanted`, falling back to `warn`. The rejected
/// directives are handed back so they can be reported once logging is up.
fn build_filter(wanted: String) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(&wanted) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new("warn"), Some(wanted)),
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn set_logger(verbose: bool, quiet: bool) {
    let wanted = directives(verbose, quiet, std::env::var(LOG_ENV).ok());
    let (filter, rejected) = build_filter(wanted);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logger already installed");
    }
    if let Some(rejected) = rejected {
        tracing::warn!(directives = %rejected, "ignoring invalid {LOG_ENV}, using warn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_env() {
        assert_eq!(directives(true, false, Some("trace".to_owned())), "debug");
    }

    #[test]
    fn quiet_wins_over_env() {
        assert_eq!(directives(false, true, Some("info".to_owned())), "error");
    }

    #[test]
    fn env_used_without_flags() {
        assert_eq!(
            directives(false, false, Some("quickunion=trace".to_owned())),
            "quickunion=trace"
        );
        assert_eq!(directives(false, false, None), "warn");
    }

    #[test]
    fn invalid_directive_is_reported_back() {
        let (_, rejected) = build_filter("quickunion=loud".to_owned());
        assert_eq!(rejected.as_deref(), Some("quickunion=loud"));
    }

    #[test]
    fn valid_directive_is_kept() {
        let (_, rejected) = build_filter("quickunion=trace".to_owned());
        assert!(rejected.is_none());
    }
}
