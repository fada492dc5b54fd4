use std::path::PathBuf;

/// Lifecycle notifications emitted by the host runner during a session.
///
/// These events decouple the execution engine from the reporting layer:
/// the engine describes what happened, frontends decide how to present it.
/// Attach/detach are not events — they are the [`crate::bus::Observer`]
/// lifecycle calls that bracket the stream.
#[derive(Debug, Clone)]
pub enum Event {
    /// Free-form message parts, rendered verbatim as a single line.
    Log(Vec<String>),
    /// A script failed in a way the runner could not attribute to an exit
    /// code; carries the error's string form.
    ScriptError(String),
    /// A task — possibly grouping several scripts — is about to run.
    TaskStart(Vec<TaskNode>),
    /// One script inside the running task has started.
    ScriptStart(ScriptRef),
    /// One script inside the running task has finished.
    ScriptEnd(ScriptResult),
    /// The whole task has finished; carries every script result.
    TaskEnd(Vec<ResultNode>),
    /// The host noticed a file change while watching the workspace.
    Watch { path: PathBuf, kind: String },
}

/// One element of a task-start payload.
///
/// Hosts schedule tasks as stages of units (serial stages of parallel units
/// and vice versa), so the payload nests arbitrarily. Reporting only cares
/// about the flattened sequence.
#[derive(Debug, Clone)]
pub enum TaskNode {
    /// A single schedulable unit.
    Unit(TaskUnit),
    /// A nested stage of further nodes.
    Group(Vec<TaskNode>),
}

/// A schedulable unit wrapping its main script descriptor.
#[derive(Debug, Clone, Default)]
pub struct TaskUnit {
    /// The unit's main script; hosts may schedule placeholder units with no
    /// resolved script.
    pub main: Option<ScriptRef>,
}

impl TaskUnit {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            main: Some(ScriptRef::new(name)),
        }
    }

    /// The unit's display name, or `"unknown"` when no script was resolved.
    pub fn display_name(&self) -> &str {
        match &self.main {
            Some(script) => script.name.as_str(),
            None => "unknown",
        }
    }
}

/// A script as the host names it.
#[derive(Debug, Clone)]
pub struct ScriptRef {
    pub name: String,
    /// Auxiliary descriptors, present only when the host has extra context
    /// to show (e.g. forwarded arguments).
    pub meta: Option<ScriptMeta>,
}

impl ScriptRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: None,
        }
    }
}

/// Optional descriptive extras attached to a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptMeta {
    /// Words appended after the script name in start lines.
    pub suffix: Vec<String>,
}

/// Outcome of one finished script.
#[derive(Debug, Clone)]
pub struct ScriptResult {
    pub script: ScriptRef,
    /// 0 is success; anything greater is a failure.
    pub exit_code: i32,
}

impl ScriptResult {
    pub fn new(name: impl Into<String>, exit_code: i32) -> Self {
        Self {
            script: ScriptRef::new(name),
            exit_code,
        }
    }
}

/// One element of a task-end payload; nests like [`TaskNode`].
#[derive(Debug, Clone)]
pub enum ResultNode {
    Leaf(ScriptResult),
    Group(Vec<ResultNode>),
}

/// Flatten a nested task-start payload into its units, in emission order.
pub fn flatten_units(nodes: &[TaskNode]) -> Vec<&TaskUnit> {
    let mut units = Vec::new();
    collect_units(nodes, &mut units);
    units
}

fn collect_units<'a>(nodes: &'a [TaskNode], out: &mut Vec<&'a TaskUnit>) {
    for node in nodes {
        match node {
            TaskNode::Unit(unit) => out.push(unit),
            TaskNode::Group(inner) => collect_units(inner, out),
        }
    }
}

/// Flatten a nested task-end payload into its script results, in emission
/// order.
pub fn flatten_results(nodes: &[ResultNode]) -> Vec<&ScriptResult> {
    let mut results = Vec::new();
    collect_results(nodes, &mut results);
    results
}

fn collect_results<'a>(nodes: &'a [ResultNode], out: &mut Vec<&'a ScriptResult>) {
    for node in nodes {
        match node {
            ResultNode::Leaf(result) => out.push(result),
            ResultNode::Group(inner) => collect_results(inner, out),
        }
    }
}

/// Fold script exit codes into one session status: 1 if any code is greater
/// than zero, else 0. An empty sequence folds to 0.
pub fn aggregate_exit_code(codes: &[i32]) -> i32 {
    if codes.iter().any(|code| *code > 0) { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- flatten_units tests --

    #[test]
    fn test_flatten_units_flat() {
        let nodes = vec![
            TaskNode::Unit(TaskUnit::named("lint")),
            TaskNode::Unit(TaskUnit::named("test")),
        ];
        let names: Vec<&str> = flatten_units(&nodes)
            .iter()
            .map(|u| u.display_name())
            .collect();
        assert_eq!(names, vec!["lint", "test"]);
    }

    #[test]
    fn test_flatten_units_nested_preserves_order() {
        let nodes = vec![
            TaskNode::Unit(TaskUnit::named("first")),
            TaskNode::Group(vec![
                TaskNode::Unit(TaskUnit::named("second")),
                TaskNode::Group(vec![TaskNode::Unit(TaskUnit::named("third"))]),
            ]),
            TaskNode::Unit(TaskUnit::named("fourth")),
        ];
        let names: Vec<&str> = flatten_units(&nodes)
            .iter()
            .map(|u| u.display_name())
            .collect();
        assert_eq!(names, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_flatten_units_empty() {
        assert!(flatten_units(&[]).is_empty());
        assert!(flatten_units(&[TaskNode::Group(vec![])]).is_empty());
    }

    #[test]
    fn test_display_name_placeholder_unit() {
        let unit = TaskUnit::default();
        assert_eq!(unit.display_name(), "unknown");
    }

    // -- flatten_results tests --

    #[test]
    fn test_flatten_results_nested() {
        let nodes = vec![
            ResultNode::Leaf(ScriptResult::new("build", 0)),
            ResultNode::Group(vec![
                ResultNode::Leaf(ScriptResult::new("lint", 1)),
                ResultNode::Leaf(ScriptResult::new("test", 2)),
            ]),
        ];
        let results = flatten_results(&nodes);
        let names: Vec<&str> = results.iter().map(|r| r.script.name.as_str()).collect();
        let codes: Vec<i32> = results.iter().map(|r| r.exit_code).collect();
        assert_eq!(names, vec!["build", "lint", "test"]);
        assert_eq!(codes, vec![0, 1, 2]);
    }

    // -- aggregate_exit_code tests --

    #[test]
    fn test_aggregate_all_success() {
        assert_eq!(aggregate_exit_code(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_aggregate_any_failure_forces_one() {
        assert_eq!(aggregate_exit_code(&[0, 1, 0]), 1);
        assert_eq!(aggregate_exit_code(&[0, 0, 127]), 1);
    }

    #[test]
    fn test_aggregate_empty_is_success() {
        assert_eq!(aggregate_exit_code(&[]), 0);
    }

    #[test]
    fn test_aggregate_negative_codes_are_not_failures() {
        // Signal-terminated scripts report negative codes; only a positive
        // exit code marks a failure.
        assert_eq!(aggregate_exit_code(&[-1, 0]), 0);
    }
}
