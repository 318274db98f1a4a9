// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color output mode handling for terminal output.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// When to colorize output.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice for a stdout stream.
    ///
    /// termcolor's own `Auto` still colorizes piped output, so auto mode
    /// checks the terminal itself.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
