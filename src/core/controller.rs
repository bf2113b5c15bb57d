use std::io::{BufRead, Write};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub format: OutputFormat,
}

impl AppState {
    pub fn new(config: Configuration, format: OutputFormat) -> AppState {
        AppState {
            config,
            format,
        }
    }
}

// Console is the line-oriented text channel the menu runs over
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    /// Reads one line without its line terminator, `None` at end of input.
    pub fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn write_line(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
