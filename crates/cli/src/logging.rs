use tracing_subscriber::EnvFilter;

/// Overrides the `-v` level with a full `EnvFilter` directive string.
pub const LOG_ENV: &str = "WCONN_LOG";

/// Installs the stderr subscriber. Stdout stays reserved for command output.
pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.compact()
		.try_init();
}

// Healed session entries log at warn, so they show without -v.
fn default_directives(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_level() {
		assert_eq!(default_directives(0), "warn");
		assert_eq!(default_directives(1), "info");
		assert_eq!(default_directives(2), "debug");
		assert_eq!(default_directives(9), "debug");
	}
}
