use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::style;
use crate::time::Stopwatch;

/// Writes report lines of the shape `+ <duration> <icon> <message>`.
///
/// The duration is the lap time since the previous line, so a glance down
/// the left margin shows where a run spent its time. The `+ <duration>`
/// prefix renders dimmed.
pub struct LineEmitter<W: Write> {
    sink: W,
    watch: Stopwatch,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            watch: Stopwatch::start(),
        }
    }

    /// Restart the lap timer without emitting anything.
    pub fn reset(&mut self) {
        self.watch.reset();
    }

    /// Emit one line under the ordinary marker.
    pub fn emit<S: AsRef<str>>(&mut self, parts: &[S]) {
        self.write_line(style::icon(), parts);
    }

    /// Emit one line under the failure marker.
    pub fn emit_fatal<S: AsRef<str>>(&mut self, parts: &[S]) {
        self.write_line(style::icon_fatal(), parts);
    }

    fn write_line<S: AsRef<str>>(&mut self, icon: ColoredString, parts: &[S]) {
        let message: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
        let prefix = format!("+ {}", self.watch.lap()).dimmed();
        let line = format!("{prefix} {icon} {}\n", message.join(" "));
        // Sink failures are the host's concern, not the reporter's.
        let _ = self.sink.write_all(line.as_bytes());
        let _ = self.sink.flush();
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn plain_output(emit: impl FnOnce(&mut LineEmitter<Vec<u8>>)) -> String {
        colored::control::set_override(false);
        let mut emitter = LineEmitter::new(Vec::new());
        emit(&mut emitter);
        String::from_utf8(emitter.into_sink()).unwrap()
    }

    #[test]
    fn test_line_shape() {
        let out = plain_output(|e| e.emit(&["hello", "world"]));
        let re = Regex::new(r"\A\+ [ \d]{4} ms :: hello world\n\z").unwrap();
        assert!(re.is_match(&out), "unexpected line: {out:?}");
    }

    #[test]
    fn test_fatal_lines_use_failure_marker() {
        let out = plain_output(|e| e.emit_fatal(&["spawn failed"]));
        let re = Regex::new(r"\A\+ [ \d]{4} ms !! spawn failed\n\z").unwrap();
        assert!(re.is_match(&out), "unexpected line: {out:?}");
    }

    #[test]
    fn test_each_emit_is_one_line() {
        let out = plain_output(|e| {
            e.emit(&["first"]);
            e.emit(&["second"]);
        });
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("second\n"));
    }

    #[test]
    fn test_duration_column_is_fixed_width() {
        let out = plain_output(|e| e.emit(&["x"]));
        // "+ " then the 7-char duration, then a space before the marker.
        assert!(out.starts_with("+ "));
        assert!(out[2..9].ends_with("ms"));
        assert_eq!(&out[9..12], " ::");
    }
}
