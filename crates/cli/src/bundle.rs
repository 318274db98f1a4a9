// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The bundle seam: the prebuilt benchmark application as a black box.
//!
//! A bundle emits any number of `log` chunks while it runs and exactly one
//! `result` report at the end. Everything else about it is opaque to this
//! tool.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;
use crossbeam_channel::Sender;

use crate::stats::Report;

/// Variable naming the path a bundle process writes its report to.
pub const REPORT_PATH_VAR: &str = "TALLY_REPORT";

/// One event out of a bundle, in emission order.
#[derive(Debug)]
pub enum Event {
    /// A chunk of progress text, forwarded verbatim.
    Log(String),
    /// The final report, emitted once at the end of a run.
    Result(Report),
}

/// Sending half handed to a bundle; `log` and `result` are the bundle's two
/// output channels.
pub struct EventSink {
    tx: Sender<Event>,
}

impl EventSink {
    pub(crate) fn new(tx: Sender<Event>) -> Self {
        Self { tx }
    }

    /// Emit one chunk of log text.
    pub fn log(&self, chunk: impl Into<String>) {
        // A closed channel means the consumer is gone; nothing left to do.
        let _ = self.tx.send(Event::Log(chunk.into()));
    }

    /// Emit the final report.
    pub fn result(&self, report: Report) {
        let _ = self.tx.send(Event::Result(report));
    }
}

/// A runnable application bundle.
///
/// Implementations block until the run completes, emitting events through
/// the sink as they happen. Dropping the sink on return closes the stream.
pub trait Bundle: Send + 'static {
    fn run(self: Box<Self>, sink: EventSink) -> anyhow::Result<()>;
}

/// The production bundle: a prebuilt benchmark executable.
///
/// Process contract: the bundle writes progress text to its stdout, which
/// is forwarded chunk-by-chunk as `log` events, and writes its report as a
/// JSON object to the file named by [`REPORT_PATH_VAR`] in its environment.
/// The report is read once, after the process exits, so every log chunk is
/// emitted before the `result` event.
pub struct ProcessBundle {
    command: PathBuf,
    args: Vec<String>,
    env: Vec<(String, String)>,
    report_path: PathBuf,
}

impl ProcessBundle {
    pub fn new(
        command: impl Into<PathBuf>,
        args: Vec<String>,
        report_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command: command.into(),
            args,
            env: Vec::new(),
            report_path: report_path.into(),
        }
    }

    /// Add an environment binding exported to the bundle process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}

impl Bundle for ProcessBundle {
    fn run(self: Box<Self>, sink: EventSink) -> anyhow::Result<()> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .env(REPORT_PATH_VAR, &self.report_path)
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start bundle {}", self.command.display()))?;

        tracing::debug!("bundle {} started", self.command.display());

        // Forward stdout as it arrives. Chunks are passed through verbatim,
        // so no line framing is imposed here.
        let mut stdout = child.stdout.take().context("bundle stdout not captured")?;
        let mut buf = [0u8; 4096];
        loop {
            let n = stdout.read(&mut buf)?;
            if n == 0 {
                break;
            }
            sink.log(String::from_utf8_lossy(&buf[..n]).into_owned());
        }

        let status = child.wait()?;
        if !status.success() {
            anyhow::bail!("bundle exited with {status}");
        }

        let text = std::fs::read_to_string(&self.report_path).with_context(|| {
            format!("bundle wrote no report at {}", self.report_path.display())
        })?;
        let report: Report = serde_json::from_str(&text)
            .with_context(|| format!("malformed bundle report at {}", self.report_path.display()))?;
        let _ = std::fs::remove_file(&self.report_path);

        sink.result(report);
        Ok(())
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
