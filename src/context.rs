// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide logging context and lifecycle.
//!
//! The group registry, the command queue, and the dispatch worker form one
//! shared state block. It is encapsulated here as an explicitly lifecycled
//! context rather than loose globals: lazily initialized on first use,
//! torn down by `drain`, and fully recycled by `reset` for test isolation.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Sender};

use crate::command::Command;
use crate::config::Config;
use crate::group::{GroupId, GroupRegistry, RegistryError};
use crate::worker::DispatchWorker;

/// Live logging engine: the queue's send side, the worker's join handle,
/// and the shared registry.
struct LogContext {
    sender: Sender<Command>,
    worker: JoinHandle<()>,
    registry: Arc<Mutex<GroupRegistry>>,
}

struct GlobalState {
    ctx: Option<LogContext>,
    /// Set by `drain`. Using the facility afterwards is a programming error.
    closed: bool,
}

static STATE: Mutex<GlobalState> = Mutex::new(GlobalState {
    ctx: None,
    closed: false,
});

/// Build a fresh registry, queue, and worker thread.
fn start(config: &Config) -> LogContext {
    let registry = Arc::new(Mutex::new(GroupRegistry::new()));
    let (sender, receiver) = bounded(config.queue_capacity);

    let worker = DispatchWorker::new(receiver, Arc::clone(&registry), config.trace_enabled);
    let handle = std::thread::spawn(move || worker.run());

    LogContext {
        sender,
        worker: handle,
        registry,
    }
}

/// Run `f` against the live context, initializing the facility with default
/// configuration on first use.
///
/// Panics after `drain`: producers must not use the facility once it has
/// been shut down.
fn with_context<R>(f: impl FnOnce(&LogContext) -> R) -> R {
    let mut state = STATE.lock().unwrap();
    if state.closed {
        // Release the lock first; a poisoned mutex in later calls would
        // mask the real mistake.
        drop(state);
        panic!("grouplog: logging facility used after drain()");
    }

    let ctx = state.ctx.get_or_insert_with(|| start(&Config::default()));
    f(ctx)
}

/// Enqueue one command, blocking while the queue is full.
///
/// The send happens outside the state lock so backpressure never stalls
/// registration or lifecycle operations on other threads.
pub(crate) fn enqueue(cmd: Command) {
    let sender = with_context(|ctx| ctx.sender.clone());
    let _ = sender.send(cmd);
}

/// Append a group to the live registry. Direct mutation, not queued; see
/// the registration notes on the public `register_group`.
pub(crate) fn register_group(
    name: &str,
    output: Box<dyn Write + Send>,
    enabled: bool,
) -> Result<GroupId, RegistryError> {
    with_context(|ctx| ctx.registry.lock().unwrap().register(name, output, enabled))
}

/// Swap the default group's output in place, keeping its enabled flag.
pub(crate) fn set_default_output(output: Box<dyn Write + Send>) {
    with_context(|ctx| ctx.registry.lock().unwrap().set_default_output(output));
}

/// Start the facility with an explicit configuration.
///
/// Panics if a context is already running; call before any logging, or
/// after `drain`.
pub(crate) fn init(config: Config) {
    let mut state = STATE.lock().unwrap();
    if state.ctx.is_some() {
        drop(state);
        panic!("grouplog: logging facility is already initialized");
    }

    state.closed = false;
    state.ctx = Some(start(&config));
}

/// Close the queue and block until the worker has executed every command
/// enqueued so far, leaving the facility in its terminal state.
///
/// Safe to call when the facility was never used; a second call is a no-op.
pub(crate) fn drain() {
    let mut state = STATE.lock().unwrap();
    state.closed = true;

    if let Some(ctx) = state.ctx.take() {
        shutdown(ctx);
    }
}

/// Tear down any live worker and reinitialize to the single-default-group
/// state. Intended for test isolation; must not race in-flight producers.
pub(crate) fn reset() {
    let mut state = STATE.lock().unwrap();
    if let Some(ctx) = state.ctx.take() {
        shutdown(ctx);
    }

    state.closed = false;
    state.ctx = Some(start(&Config::default()));
}

/// Drop the send side and wait for the worker to drain and exit.
fn shutdown(ctx: LogContext) {
    let LogContext { sender, worker, .. } = ctx;
    drop(sender);
    let _ = worker.join();
}
