//! Result types for session operations
//!
//! This module contains the session-owned [`ResultCache`] and the output
//! structures returned by [`GradleSession`](crate::session::GradleSession).

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use gradle_tasks_protocol::{ExecutionResult, TaskRecord, DEFAULT_GROUP};

/// Name-keyed store of the most recent [`ExecutionResult`] per task.
///
/// Owned by a session and dropped with it; nothing here outlives the process.
/// The lister only reads from it, task runs write to it.
#[derive(Debug, Default, Clone)]
pub struct ResultCache {
    results: HashMap<String, ExecutionResult>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last result recorded for `task_name`, if any
    pub fn get(&self, task_name: &str) -> Option<&ExecutionResult> {
        self.results.get(task_name)
    }

    /// Store `result` under its task name, replacing any earlier run
    pub fn record(&mut self, result: ExecutionResult) {
        self.results.insert(result.task_name.clone(), result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

/// Result of loading the task listing
#[derive(Debug, Clone)]
pub struct TaskListResult {
    pub tasks: Vec<TaskRecord>,
    /// Rendered command line that produced the listing
    pub command: String,
    pub working_dir: PathBuf,
}

/// Tasks filed under one group, in listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub name: String,
    pub tasks: Vec<TaskRecord>,
}

/// Group tasks for display: groups sorted by name, tasks in encounter order.
pub fn group_tasks(tasks: &[TaskRecord]) -> Vec<TaskGroup> {
    let mut groups: BTreeMap<String, Vec<TaskRecord>> = BTreeMap::new();
    for task in tasks {
        let name = if task.group.is_empty() {
            DEFAULT_GROUP.to_string()
        } else {
            task.group.clone()
        };
        groups.entry(name).or_default().push(task.clone());
    }

    groups
        .into_iter()
        .map(|(name, tasks)| TaskGroup { name, tasks })
        .collect()
}

/// Result of building the inferred dependency graph
#[derive(Debug)]
pub struct DependencyGraphResult {
    /// Edges point from a task to each of its inferred dependencies
    pub graph: petgraph::Graph<String, ()>,
    pub cycles: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_previous_result() {
        let mut cache = ResultCache::new();
        assert!(cache.is_empty());

        cache.record(ExecutionResult::failure("test", 100, "", "boom"));
        cache.record(ExecutionResult::success("test", 50, "ok"));

        assert_eq!(cache.len(), 1);
        let stored = cache.get("test").unwrap();
        assert!(stored.succeeded);
        assert_eq!(stored.duration_ms, 50);

        cache.clear();
        assert!(cache.get("test").is_none());
    }

    #[test]
    fn groups_sorted_alphabetically_tasks_keep_order() {
        let tasks = vec![
            TaskRecord::new("test", "", "Verification"),
            TaskRecord::new("build", "", "Build"),
            TaskRecord::new("check", "", "Verification"),
            TaskRecord::new("assemble", "", "Build"),
            TaskRecord::new("stray", "", ""),
        ];

        let groups = group_tasks(&tasks);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Build", "Other", "Verification"]);

        let build: Vec<_> = groups[0].tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(build, vec!["build", "assemble"]);

        let verification: Vec<_> = groups[2].tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(verification, vec!["test", "check"]);
    }

    #[test]
    fn grouping_empty_list() {
        assert!(group_tasks(&[]).is_empty());
    }
}
