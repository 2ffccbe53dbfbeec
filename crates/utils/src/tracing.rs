// Copyright 2023-2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that additionally logs span close events with their timings.
pub const LOG_SPANS_FLAG: &str = "STRIBOG_LOG_SPANS";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling this more than once, or after another subscriber was installed, has no effect.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
