// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros - the trace/info call family

/// Log to the default group at trace level.
///
/// Accepts `format!`-style arguments. Output appears only while the global
/// trace gate and the default group are both enabled.
///
/// # Examples
/// ```ignore
/// grouplog::trace!("cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log($crate::DEFAULT_GROUP, $crate::Level::Trace, format_args!($($arg)*))
    };
}

/// Log to the default group at info level.
///
/// # Examples
/// ```ignore
/// grouplog::info!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log($crate::DEFAULT_GROUP, $crate::Level::Info, format_args!($($arg)*))
    };
}

/// Log to the given group at trace level.
///
/// # Examples
/// ```ignore
/// grouplog::traceg!(audit, "checked permissions for {}", user);
/// ```
#[macro_export]
macro_rules! traceg {
    ($group:expr, $($arg:tt)*) => {
        $crate::log($group, $crate::Level::Trace, format_args!($($arg)*))
    };
}

/// Log to the given group at info level.
///
/// # Examples
/// ```ignore
/// grouplog::infog!(audit, "user {} logged in", user);
/// ```
#[macro_export]
macro_rules! infog {
    ($group:expr, $($arg:tt)*) => {
        $crate::log($group, $crate::Level::Info, format_args!($($arg)*))
    };
}
