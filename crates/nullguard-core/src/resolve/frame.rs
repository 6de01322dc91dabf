//! Diagnostic suffix appended to every failure message.
//!
//! The suffix reads like a synthetic stack frame:
//! `"\n\tat {type}.{member}({file}:{line})"`. Line numbers are best effort;
//! an unknown line renders as [`UNKNOWN_LINE`] and never produces an error.

use std::fmt;

use crate::policy::CallTarget;

/// Rendered in place of a line number that could not be found.
pub const UNKNOWN_LINE: &str = "?";

/// Synthetic stack frame for a call target.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    target: &'a CallTarget,
    file: Option<&'a str>,
    line: Option<u32>,
}

impl<'a> Frame<'a> {
    pub fn new(target: &'a CallTarget) -> Self {
        Self {
            target,
            file: None,
            line: None,
        }
    }

    pub fn file(mut self, file: Option<&'a str>) -> Self {
        self.file = file;
        self
    }

    pub fn line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declaring = self.target.declaring();
        write!(f, "\n\tat {}.{}(", declaring.name(), self.target.name())?;
        match self.file {
            Some(file) => f.write_str(file)?,
            None => write!(f, "{}.rs", declaring.simple_name())?,
        }
        match self.line {
            Some(line) => write!(f, ":{line})"),
            None => write!(f, ":{UNKNOWN_LINE})"),
        }
    }
}

/// Produces the diagnostic suffix for a target.
pub trait LineSuffix: Send + Sync {
    fn line_suffix(&self, target: &CallTarget) -> String;
}

/// Frame with the placeholder line and the default file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSuffix;

impl LineSuffix for PlaceholderSuffix {
    fn line_suffix(&self, target: &CallTarget) -> String {
        Frame::new(target).to_string()
    }
}

impl<F> LineSuffix for F
where
    F: Fn(&CallTarget) -> String + Send + Sync,
{
    fn line_suffix(&self, target: &CallTarget) -> String {
        self(target)
    }
}
