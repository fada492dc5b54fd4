use std::io::{Stdout, Write, stdout};

use colored::Colorize;
use tasklog_core::bus::Observer;
use tasklog_core::events::{
    Event, ResultNode, ScriptRef, ScriptResult, TaskNode, aggregate_exit_code, flatten_results,
    flatten_units,
};
use tasklog_core::host::{HostInfo, MANIFEST_FILE};

use crate::config::ReporterOptions;
use crate::output::LineEmitter;
use crate::style::{self, GLUE};

/// Renders the host's lifecycle as timestamped console lines.
///
/// Task boundaries are always reported. Per-script lines only appear while
/// the running task schedules more than one unit; for a single unit they
/// would just repeat the task lines. The reporter also folds script exit
/// codes into one session status, which decides the farewell banner.
pub struct ConsoleReporter<W: Write> {
    options: ReporterOptions,
    emitter: LineEmitter<W>,
    fine_grained: bool,
    exit_status: Option<i32>,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout(options: ReporterOptions) -> Self {
        Self::new(options, stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(options: ReporterOptions, sink: W) -> Self {
        Self {
            options,
            emitter: LineEmitter::new(sink),
            fine_grained: false,
            exit_status: None,
        }
    }

    /// The folded session status: `Some(0)` after a fully successful task,
    /// `Some(1)` after any script failure, `None` before any task finished.
    pub fn exit_status(&self) -> Option<i32> {
        self.exit_status
    }

    pub fn into_sink(self) -> W {
        self.emitter.into_sink()
    }

    fn notify_startup(&mut self, host: &HostInfo) {
        if self.options.notify_cwd {
            match &host.manifest_path {
                Some(path) => {
                    let shown =
                        pathdiff::diff_paths(path, &host.cwd).unwrap_or_else(|| path.clone());
                    let shown = shown.display().to_string();
                    self.emitter
                        .emit(&[format!("use {}.", style::emphasize(&[shown], GLUE))]);
                }
                None => {
                    self.emitter.emit(&[format!("missing {MANIFEST_FILE}.")]);
                }
            }
        }
        if self.options.notify_plugins && !host.plugins.is_empty() {
            self.emitter.emit(&[format!(
                "plugin enabled {}.",
                style::emphasize(&host.plugins, GLUE)
            )]);
        }
    }

    fn task_start(&mut self, nodes: &[TaskNode]) {
        let units = flatten_units(nodes);
        let names: Vec<&str> = units.iter().map(|unit| unit.display_name()).collect();
        self.emitter
            .emit(&[format!("task start {}.", style::underline(&names, GLUE))]);
        if units.len() > 1 {
            self.fine_grained = true;
        }
    }

    fn script_start(&mut self, script: &ScriptRef) {
        let mut line = format!(
            "script start {}",
            style::underline(&[script.name.as_str()], GLUE)
        );
        if let Some(meta) = &script.meta
            && !meta.suffix.is_empty()
        {
            line.push(' ');
            line.push_str(&meta.suffix.join(" "));
        }
        line.push('.');
        self.emitter.emit(&[line]);
    }

    fn script_end(&mut self, result: &ScriptResult) {
        let name = style::statuses(
            &[result.script.name.as_str()],
            Some(&[result.exit_code]),
            GLUE,
        );
        let code = style::statuses(&[result.exit_code.to_string()], None, GLUE);
        self.emitter
            .emit(&[format!("script end {name}. exit code {code}.")]);
    }

    fn task_end(&mut self, nodes: &[ResultNode]) {
        let results = flatten_results(nodes);
        let names: Vec<&str> = results
            .iter()
            .map(|result| result.script.name.as_str())
            .collect();
        let codes: Vec<i32> = results.iter().map(|result| result.exit_code).collect();
        let code_labels: Vec<String> = codes.iter().map(i32::to_string).collect();
        self.exit_status = Some(aggregate_exit_code(&codes));
        self.emitter.emit(&[format!(
            "task end {}. exit code {}.",
            style::statuses(&names, Some(&codes), GLUE),
            style::statuses(&code_labels, None, GLUE),
        )]);
        // Per-script reporting never outlives its task, even when nothing
        // enabled it.
        self.fine_grained = false;
    }
}

impl<W: Write + Send> Observer for ConsoleReporter<W> {
    fn attached(&mut self, host: &HostInfo) {
        self.emitter.reset();
        self.notify_startup(host);
    }

    fn on_event(&mut self, event: &Event) {
        match event {
            Event::Log(parts) => self.emitter.emit(parts),
            Event::ScriptError(message) => self.emitter.emit_fatal(&[message.as_str()]),
            Event::TaskStart(nodes) => self.task_start(nodes),
            Event::ScriptStart(script) => {
                if self.fine_grained {
                    self.script_start(script);
                }
            }
            Event::ScriptEnd(result) => {
                if self.fine_grained {
                    self.script_end(result);
                }
            }
            Event::TaskEnd(nodes) => self.task_end(nodes),
            Event::Watch { path, kind } => {
                self.emitter.emit(&[format!(
                    "file {} {kind}.",
                    path.display().to_string().bold()
                )]);
            }
        }
    }

    fn detached(&mut self) {
        // Only a finished, fully successful task earns the cheer; a session
        // that never ran a task apologizes too.
        if self.exit_status == Some(0) {
            self.emitter.emit(&["cheers for good work."]);
        } else {
            self.emitter.emit_fatal(&["i'm terribly sorry..."]);
        }
    }
}
