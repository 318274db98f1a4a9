// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness bootstrap: headless environment setup and event-channel wiring.
//!
//! `start` is the seam between the black-box bundle and the aggregator: it
//! hands the bundle a sink, runs it on a worker thread, and gives the
//! caller one ordered stream of its events.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, unbounded};

use crate::bundle::{Bundle, Event, EventSink, ProcessBundle};

/// Environment bindings standing in for the browser request API.
///
/// Headless bundle builds expect a request backend to exist the way a
/// browser's XHR does; pointing them at the stub backend satisfies that
/// contract without touching the network. Exported to the bundle process
/// before it is instantiated; the shim lives as long as the bundle does,
/// so there is no teardown.
pub const REQUEST_SHIM_ENV: &[(&str, &str)] = &[("XHR_BACKEND", "stub")];

/// Start `bundle` on a worker thread.
///
/// Returns the receiving half of the event channel plus the worker handle.
/// Events arrive in emission order: every `log` chunk the bundle emits
/// before its report is received before the `result` event. The channel
/// closes when the bundle returns.
pub fn start(bundle: Box<dyn Bundle>) -> (Receiver<Event>, JoinHandle<anyhow::Result<()>>) {
    let (tx, rx) = unbounded();
    let sink = EventSink::new(tx);
    let handle = std::thread::spawn(move || bundle.run(sink));
    (rx, handle)
}

/// Bootstrap the production bundle process: apply the request shim, export
/// a fresh report path, and start it with empty initial configuration.
pub fn start_process(
    command: &Path,
    args: &[String],
) -> (Receiver<Event>, JoinHandle<anyhow::Result<()>>) {
    let mut bundle = ProcessBundle::new(command, args.to_vec(), report_path());
    for (key, value) in REQUEST_SHIM_ENV {
        bundle = bundle.env(key, value);
    }
    start(Box::new(bundle))
}

/// Per-process location for the bundle's report document.
fn report_path() -> PathBuf {
    std::env::temp_dir().join(format!("tally-report-{}.json", std::process::id()))
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
