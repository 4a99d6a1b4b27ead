//! Heuristic task dependency inference
//!
//! Gradle's plain task listing does not expose the task graph, so dependencies
//! are guessed from task names with an ordered table of substring rules. The
//! output is a hint for display, not Gradle's real graph: `rebuild` matches the
//! `build` rule, and a name matching several rules can list the same
//! dependency more than once.

use std::collections::HashMap;

use gradle_tasks_protocol::TaskRecord;
use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::results::DependencyGraphResult;

/// One row of the rule table: tasks whose name contains `trigger` depend on
/// the first task whose name contains each of `candidates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DependencyRule {
    pub trigger: String,
    #[serde(default)]
    pub candidates: Vec<String>,
}

impl DependencyRule {
    pub fn new(trigger: impl Into<String>, candidates: &[&str]) -> Self {
        Self {
            trigger: trigger.into(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn applies_to(&self, task_name: &str) -> bool {
        task_name.contains(self.trigger.as_str())
    }
}

/// Ordered list of [`DependencyRule`]s. Rule order decides dependency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<DependencyRule>,
}

impl Default for RuleTable {
    /// The conventional Java/Gradle lifecycle table.
    fn default() -> Self {
        Self::new(vec![
            DependencyRule::new("build", &["compile", "test", "jar"]),
            DependencyRule::new("test", &["compileTest"]),
            DependencyRule::new("compileTest", &["compile"]),
            DependencyRule::new("jar", &["compile"]),
            DependencyRule::new("war", &["compile", "jar"]),
            DependencyRule::new("assemble", &["jar"]),
            DependencyRule::new("check", &["test"]),
            DependencyRule::new("clean", &[]),
        ])
    }
}

impl RuleTable {
    pub fn new(rules: Vec<DependencyRule>) -> Self {
        Self { rules }
    }

    /// A table that infers nothing
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn rules(&self) -> &[DependencyRule] {
        &self.rules
    }

    /// Infer the dependencies of `task_name` against `all_tasks`.
    ///
    /// For every rule whose trigger occurs in `task_name`, each candidate
    /// resolves to the first task (in list order) whose name contains it.
    /// Matches are appended without de-duplication. The task never resolves to
    /// itself.
    pub fn infer(&self, task_name: &str, all_tasks: &[TaskRecord]) -> Vec<String> {
        let mut dependencies = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.applies_to(task_name)) {
            for candidate in &rule.candidates {
                let found = all_tasks.iter().find(|task| {
                    task.name != task_name && task.name.contains(candidate.as_str())
                });
                if let Some(task) = found {
                    dependencies.push(task.name.clone());
                }
            }
        }

        dependencies
    }

    /// Fill in `dependencies` for every task in the listing
    pub fn annotate(&self, tasks: Vec<TaskRecord>) -> Vec<TaskRecord> {
        let inferred: Vec<Vec<String>> = tasks
            .iter()
            .map(|task| self.infer(&task.name, &tasks))
            .collect();

        tasks
            .into_iter()
            .zip(inferred)
            .map(|(task, dependencies)| TaskRecord {
                dependencies,
                ..task
            })
            .collect()
    }
}

/// [`RuleTable::infer`] with the default table
pub fn infer_dependencies(task_name: &str, all_tasks: &[TaskRecord]) -> Vec<String> {
    RuleTable::default().infer(task_name, all_tasks)
}

/// [`RuleTable::annotate`] with the default table
pub fn annotate_dependencies(tasks: Vec<TaskRecord>) -> Vec<TaskRecord> {
    RuleTable::default().annotate(tasks)
}

/// Build a directed graph from annotated tasks (edge: task -> dependency).
///
/// Duplicate task names collapse into one node and repeated dependencies into
/// one edge. Strongly connected components larger than one task are reported
/// as cycles, each sorted by name.
pub fn build_dependency_graph(tasks: &[TaskRecord]) -> DependencyGraphResult {
    let mut graph = DiGraph::<String, ()>::new();
    let mut node_indices = HashMap::new();

    for task in tasks {
        node_indices
            .entry(task.name.clone())
            .or_insert_with(|| graph.add_node(task.name.clone()));
    }

    for task in tasks {
        let Some(&from_node) = node_indices.get(&task.name) else {
            continue;
        };
        for dep in &task.dependencies {
            if let Some(&to_node) = node_indices.get(dep) {
                if !graph.contains_edge(from_node, to_node) {
                    graph.add_edge(from_node, to_node, ());
                }
            }
        }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut names: Vec<String> = component
                .iter()
                .filter_map(|index| graph.node_weight(*index).cloned())
                .collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();

    DependencyGraphResult { graph, cycles }
}
