// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed commands carried by the dispatch queue.
//!
//! Log emissions and enablement changes travel through the same bounded
//! queue, so the dispatch worker applies them in true enqueue order: an
//! enable flip lands exactly between the log calls it was issued between.

use chrono::{DateTime, Utc};

use crate::group::GroupId;

/// One unit of work for the dispatch worker.
///
/// Commands are immutable once constructed and carry everything the worker
/// needs, so execution never consults caller-side state.
#[derive(Debug)]
pub(crate) enum Command {
    /// Emit a trace-level line. Dropped unless the global trace gate and the
    /// group's enabled flag are both set at dispatch time.
    EmitTrace {
        group: GroupId,
        timestamp: DateTime<Utc>,
        text: String,
    },
    /// Emit an info-level line. Dropped unless the group is enabled at
    /// dispatch time.
    EmitInfo {
        group: GroupId,
        timestamp: DateTime<Utc>,
        text: String,
    },
    /// Turn the global trace gate on or off
    SetTraceEnabled { on: bool },
    /// Turn a group's output on or off
    SetGroupEnabled { group: GroupId, on: bool },
}
