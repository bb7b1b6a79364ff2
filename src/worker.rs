// Dispatch worker - drains the command queue and performs all writes

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use crossbeam_channel::Receiver;

use crate::command::Command;
use crate::format::format_line;
use crate::group::{GroupId, GroupRegistry};

/// Single consumer of the command queue.
///
/// Every side effect (filtering, formatting, writing, enablement mutation)
/// happens on this one thread, which is what gives a total order across
/// groups and levels without per-writer locks.
pub(crate) struct DispatchWorker {
    commands: Receiver<Command>,
    registry: Arc<Mutex<GroupRegistry>>,
    /// Global trace gate. Mutated only through `SetTraceEnabled` commands,
    /// which this worker itself executes, so a plain field suffices.
    trace_enabled: bool,
}

impl DispatchWorker {
    pub(crate) fn new(
        commands: Receiver<Command>,
        registry: Arc<Mutex<GroupRegistry>>,
        trace_enabled: bool,
    ) -> Self {
        Self {
            commands,
            registry,
            trace_enabled,
        }
    }

    /// Run until the queue is closed and drained, then flush every sink.
    ///
    /// The queue closes when the last sender is dropped; commands already
    /// enqueued at that point are still executed before the loop exits.
    pub(crate) fn run(mut self) {
        while let Ok(cmd) = self.commands.recv() {
            self.execute(cmd);
        }

        self.registry.lock().unwrap().flush_all();
    }

    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::EmitTrace {
                group,
                timestamp,
                text,
            } => {
                if self.trace_enabled {
                    self.emit(group, timestamp, &text);
                }
            }
            Command::EmitInfo {
                group,
                timestamp,
                text,
            } => {
                self.emit(group, timestamp, &text);
            }
            Command::SetTraceEnabled { on } => {
                self.trace_enabled = on;
            }
            Command::SetGroupEnabled { group, on } => {
                self.registry.lock().unwrap().set_enabled(group, on);
            }
        }
    }

    /// Write one line if the group exists and is enabled.
    ///
    /// Write errors are swallowed: logging must never take down the host
    /// application. Unknown group indices are ignored for the same reason.
    fn emit(&mut self, group: GroupId, timestamp: DateTime<Utc>, text: &str) {
        let mut registry = self.registry.lock().unwrap();
        if let Some(g) = registry.get_mut(group) {
            if g.enabled {
                let line = format_line(&g.name, timestamp, text);
                let _ = g.output.write_all(line.as_bytes());
            }
        }
    }
}
