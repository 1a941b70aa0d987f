//! Outgoing instruction builder
//!
//! Instructions are ASCII text like `pic 10,20,3` or `bt0.txt="run"`. The
//! builder appends typed fields so argument lists cannot go out of step
//! with their format string, and tracks overflow of the bounded buffer
//! instead of sending a truncated instruction.

use core::fmt::Write;

use heapless::String;

/// Longest instruction the builder will produce.
///
/// Sized for a worst-case `xstr` draw with a quoted string argument.
pub const MAX_COMMAND_LEN: usize = 120;

/// An owned, bounded instruction under construction.
///
/// Arguments are separated from the verb by a space and from each other
/// by commas. A builder that overflowed its buffer reports
/// `!is_valid()` and must not be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    text: String<MAX_COMMAND_LEN>,
    args: usize,
    overflow: bool,
}

impl Command {
    /// Start an instruction from its verb, e.g. `"ref"` or `"pic"`.
    pub fn new(verb: &str) -> Self {
        let mut cmd = Command {
            text: String::new(),
            args: 0,
            overflow: false,
        };
        let r = cmd.text.push_str(verb);
        cmd.record(r.is_err());
        cmd
    }

    /// An assignment instruction, e.g. `dim=50` or `bkcmd=3`.
    pub fn assign(target: &str, value: u32) -> Self {
        let mut cmd = Command::new(target);
        let r = write!(cmd.text, "={}", value);
        cmd.record(r.is_err());
        cmd
    }

    /// Set a named component property to a number: `name.property=value`.
    pub fn set_number(name: &str, property: &str, value: u32) -> Self {
        let mut cmd = Command::new(name);
        let r = write!(cmd.text, ".{}={}", property, value);
        cmd.record(r.is_err());
        cmd
    }

    /// Set a named component property to a string: `name.property="value"`.
    ///
    /// Embedded double quotes are escaped for the panel's parser.
    pub fn set_string(name: &str, property: &str, value: &str) -> Self {
        let mut cmd = Command::new(name);
        let r = write!(cmd.text, ".{}=", property);
        cmd.record(r.is_err());
        cmd.push_quoted(value);
        cmd
    }

    /// Query a named component property: `get name.property`.
    pub fn get(name: &str, property: &str) -> Self {
        let mut cmd = Command::new("get");
        let r = write!(cmd.text, " {}.{}", name, property);
        cmd.record(r.is_err());
        cmd
    }

    /// Append a numeric argument.
    pub fn arg(mut self, value: u32) -> Self {
        self.push_separator();
        let r = write!(self.text, "{}", value);
        self.record(r.is_err());
        self
    }

    /// Append a bare identifier argument (component or page name).
    pub fn arg_name(mut self, name: &str) -> Self {
        self.push_separator();
        let r = self.text.push_str(name);
        self.record(r.is_err());
        self
    }

    /// Append a quoted string argument with embedded quotes escaped.
    pub fn arg_quoted(mut self, value: &str) -> Self {
        self.push_separator();
        self.push_quoted(value);
        self
    }

    /// The instruction text, without the wire terminator.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// False once any field failed to fit the buffer.
    pub fn is_valid(&self) -> bool {
        !self.overflow
    }

    fn push_separator(&mut self) {
        let sep = if self.args == 0 { ' ' } else { ',' };
        self.args += 1;
        let r = self.text.push(sep);
        self.record(r.is_err());
    }

    fn push_quoted(&mut self, value: &str) {
        let r = self.text.push('"');
        self.record(r.is_err());
        for ch in value.chars() {
            if ch == '"' {
                let r = self.text.push('\\');
                self.record(r.is_err());
            }
            let r = self.text.push(ch);
            self.record(r.is_err());
        }
        let r = self.text.push('"');
        self.record(r.is_err());
    }

    fn record(&mut self, failed: bool) {
        if failed {
            self.overflow = true;
        }
    }
}
