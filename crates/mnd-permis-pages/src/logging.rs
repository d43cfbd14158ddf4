//! Logging abstraction layer for the contact form
//!
//! The same macros are used from controller code that runs in the browser and
//! from native tests.
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (`debug-hooks` + debug build) | `tracing::debug!` |
//! | `info_log!` | `console.info` (debug build) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug build) | `tracing::warn!` |
//! | `error_log!` | `console.error` (debug build) | `tracing::error!` |
//!
//! On native targets the events go through `tracing`, so filtering and output
//! are decided by whichever subscriber the host installs.
//!
//! ## Example
//!
//! ```ignore
//! use mnd_permis_pages::{info_log, warn_log};
//!
//! info_log!("Contact form mounted");
//! warn_log!("Submission {} rejected: already submitting", attempt_id);
//! ```

/// Logs a debug message (WASM: requires `debug-hooks` + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// No-op debug_log in WASM builds without `debug-hooks`
#[macro_export]
#[cfg(all(
	target_arch = "wasm32",
	not(all(debug_assertions, feature = "debug-hooks"))
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs a debug message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!($($arg)*);
	}};
}

/// Logs an info message (WASM: requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// No-op info_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an info message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!($($arg)*);
	}};
}

/// Logs a warning message (WASM: requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// No-op warn_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs a warning message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!($($arg)*);
	}};
}

/// Logs an error message (WASM: requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// No-op error_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an error message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!($($arg)*);
	}};
}
