//! Efficient and minimalist logging with independently switchable groups.
//!
//! Two logging levels are provided: trace and info. The trace level is for
//! developers debugging code; the info level is for the operators running
//! it: logins, page loads, requests, hardware failures, errors that cannot
//! be handled gracefully. Logging groups organize related events and give
//! them their own output destination: an "audit" group can write to
//! `audit.log` while everything else goes to stdout. One group exists from
//! startup, the default group with the empty name; more are added with
//! [`register_group`]. Groups and the whole trace level can be switched on
//! or off while the software is running; trace is off by default.
//!
//! Every log call and every enablement change becomes a command on one
//! bounded queue, drained by a single dispatch worker that performs all
//! writes. That single consumer is what makes output totally ordered across
//! threads, groups, and levels without a lock around any sink. Call
//! [`drain`] before process exit so buffered lines reach their sinks.
//!
//! # Example
//!
//! ```no_run
//! let audit = grouplog::register_group(
//!     "audit",
//!     Box::new(std::fs::File::create("audit.log").unwrap()),
//!     true,
//! );
//!
//! grouplog::info!("server started");
//! grouplog::infog!(audit, "user {} logged in", "alice");
//!
//! grouplog::enable_trace(true);
//! grouplog::trace!("request parsed in {}us", 12);
//!
//! grouplog::drain();
//! ```

mod command;
mod config;
mod context;
mod format;
mod group;
mod level;
#[macro_use]
mod macros;
mod worker;

pub use config::{Config, ConfigError, COMMAND_QUEUE_CAPACITY};
pub use group::{GroupId, RegistryError, DEFAULT_GROUP};
pub use level::Level;

use std::fmt;
use std::io::Write;

use chrono::Utc;

use command::Command;

/// Enqueue one log message for the given group and level.
///
/// This is the single operation underneath the [`trace!`], [`info!`],
/// [`traceg!`] and [`infog!`] macros. The timestamp is captured here, at
/// call time, and the message text is rendered eagerly before enqueueing,
/// so the line reflects the caller's view even though the write itself
/// happens later on the dispatch worker. Blocks while the queue is full.
pub fn log(group: GroupId, level: Level, args: fmt::Arguments<'_>) {
    let timestamp = Utc::now();
    let text = args.to_string();

    let cmd = match level {
        Level::Trace => Command::EmitTrace {
            group,
            timestamp,
            text,
        },
        Level::Info => Command::EmitInfo {
            group,
            timestamp,
            text,
        },
    };
    context::enqueue(cmd);
}

/// Register a new logging group and return its id.
///
/// Expected to be called during component initialization, before concurrent
/// logging begins: registration appends to the registry directly (under its
/// mutex) rather than travelling through the command queue.
///
/// # Panics
///
/// Panics if `name` duplicates an existing group's name, including the
/// default group's empty name. A duplicate is a configuration mistake and
/// halts startup loudly; see [`try_register_group`] for the `Result` form.
pub fn register_group(name: &str, output: Box<dyn Write + Send>, enabled: bool) -> GroupId {
    match context::register_group(name, output, enabled) {
        Ok(id) => id,
        Err(e) => panic!("grouplog: {}", e),
    }
}

/// Register a new logging group, returning an error on a duplicate name
/// instead of panicking. The registry is left untouched on failure.
pub fn try_register_group(
    name: &str,
    output: Box<dyn Write + Send>,
    enabled: bool,
) -> Result<GroupId, RegistryError> {
    context::register_group(name, output, enabled)
}

/// Replace the default group's output destination, preserving its current
/// enabled flag. Safe to call before or after other groups exist.
pub fn set_default_output(output: Box<dyn Write + Send>) {
    context::set_default_output(output);
}

/// Turn a group's logging on or off.
///
/// The change travels through the command queue, so it lands in order
/// relative to log calls already enqueued: messages sent before this call
/// are still written, messages sent after it are suppressed.
pub fn enable_group(group: GroupId, on: bool) {
    context::enqueue(Command::SetGroupEnabled { group, on });
}

/// Turn trace-level logging on or off globally.
///
/// Queued like [`enable_group`]; info-level messages are never affected.
pub fn enable_trace(on: bool) {
    context::enqueue(Command::SetTraceEnabled { on });
}

/// Close the command queue and block until the dispatch worker has executed
/// every command enqueued so far, then flush all sinks.
///
/// Call once before process exit. Logging after `drain` returns is a
/// programming error and panics.
pub fn drain() {
    context::drain();
}

/// Tear down any running worker and reinitialize the facility to its
/// startup state: only the default group, writing to stdout, trace off.
///
/// Intended for test isolation. Must not be called concurrently with
/// in-flight logging from other threads.
pub fn reset() {
    context::reset();
}

/// Initialize the facility with an explicit configuration instead of the
/// defaults applied on first use.
///
/// # Panics
///
/// Panics if the configuration is invalid or if the facility is already
/// running; call before any logging, or after [`drain`].
pub fn init_with_config(config: Config) {
    if let Err(e) = config.validate() {
        panic!("grouplog: invalid configuration: {}", e);
    }
    context::init(config);
}
