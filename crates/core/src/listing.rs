//! Task listing parser
//!
//! Turns the plain-console output of `gradle tasks --all` into an ordered list
//! of [`TaskRecord`]s. The parser is a best-effort scrape of human-readable
//! text: it never fails, malformed lines are skipped, and when no section
//! marker is recognized at all a looser fallback scan is attempted so that a
//! change in Gradle's output format degrades instead of breaking.

use std::sync::LazyLock;

use gradle_tasks_protocol::{TaskRecord, DEFAULT_GROUP};
use regex::Regex;
use tracing::debug;

use crate::results::ResultCache;

/// Leading tokens the fallback scan never treats as task names.
const FALLBACK_STOPLIST: &[&str] = &[
    "All",
    "Tasks",
    "Task",
    "Build",
    "Verification",
    "Documentation",
    "Help",
    "Other",
];

/// Pattern a task name must match: a letter, then at least one letter,
/// digit, `:`, `_` or `-`.
pub const TASK_NAME_PATTERN: &str = "[a-zA-Z][a-zA-Z0-9:_-]+";

struct Patterns {
    root_project_heading: Regex,
    group_header: Regex,
    described_task: Regex,
    bare_task: Regex,
    task_name: Regex,
    leading_token: Regex,
    header_suffix: Regex,
}

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("listing patterns are valid regular expressions")
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    root_project_heading: compile(r"(?i)^(?:all )?tasks runnable from root project"),
    group_header: compile(r"(?i)^([A-Za-z\s&]+)\s+tasks?$"),
    described_task: compile(&format!(r"^({TASK_NAME_PATTERN})\s*-\s*(.+)$")),
    bare_task: compile(&format!(r"^({TASK_NAME_PATTERN})\s*$")),
    task_name: compile(&format!(r"^{TASK_NAME_PATTERN}$")),
    leading_token: compile(&format!(r"^({TASK_NAME_PATTERN})(?:\s|$)")),
    header_suffix: compile(r"(?i)tasks?$"),
});

/// Whether `name` is a syntactically valid task name.
pub fn is_valid_task_name(name: &str) -> bool {
    PATTERNS.task_name.is_match(name)
}

/// Parse the raw output of `gradle tasks --all --console=plain`.
///
/// Records come back in encounter order with empty `dependencies`. Each
/// record's `last_result` is looked up in `results` by name. Returns an empty
/// list when nothing resembling a task was found; the caller decides how to
/// report that.
pub fn parse_task_listing(output: &str, results: &ResultCache) -> Vec<TaskRecord> {
    let patterns = &*PATTERNS;

    let mut tasks = parse_tasks_section(output, results, patterns);
    if tasks.is_empty() {
        debug!("Standard parsing found no tasks, trying fallback scan");
        tasks = parse_fallback(output, results, patterns);
    }

    debug!(count = tasks.len(), "Parsed task listing");
    tasks
}

fn parse_tasks_section(
    output: &str,
    results: &ResultCache,
    patterns: &Patterns,
) -> Vec<TaskRecord> {
    let mut tasks = Vec::new();
    let mut in_tasks_section = false;
    let mut current_group = String::new();

    for (index, line) in output.lines().enumerate() {
        let trimmed = line.trim();

        if !in_tasks_section {
            if starts_tasks_section(trimmed, patterns) {
                debug!(line = index + 1, "Found tasks section");
                in_tasks_section = true;
            }
            continue;
        }

        if let Some(captures) = patterns.group_header.captures(trimmed) {
            current_group = captures[1].trim().to_string();
            debug!(group = %current_group, "Found group");
            continue;
        }

        if is_skippable(trimmed) {
            continue;
        }

        let group = if current_group.is_empty() {
            DEFAULT_GROUP
        } else {
            current_group.as_str()
        };

        if let Some(captures) = patterns.described_task.captures(trimmed) {
            tasks.push(make_record(
                captures[1].trim(),
                captures[2].trim(),
                group,
                results,
            ));
        } else if let Some(captures) = patterns.bare_task.captures(trimmed) {
            tasks.push(make_record(captures[1].trim(), "", group, results));
        }
    }

    tasks
}

fn parse_fallback(output: &str, results: &ResultCache, patterns: &Patterns) -> Vec<TaskRecord> {
    output
        .lines()
        .map(str::trim)
        .filter(|trimmed| !trimmed.contains("---") && !patterns.header_suffix.is_match(trimmed))
        .filter_map(|trimmed| {
            let captures = patterns.leading_token.captures(trimmed)?;
            let name = captures.get(1)?.as_str();
            if FALLBACK_STOPLIST
                .iter()
                .any(|stop| stop.eq_ignore_ascii_case(name))
            {
                return None;
            }
            Some(make_record(name, "", DEFAULT_GROUP, results))
        })
        .collect()
}

fn starts_tasks_section(trimmed: &str, patterns: &Patterns) -> bool {
    (trimmed.contains("---") && trimmed.contains("Task"))
        || patterns.root_project_heading.is_match(trimmed)
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed == "---" || trimmed.chars().all(|c| c == '=')
}

fn make_record(name: &str, description: &str, group: &str, results: &ResultCache) -> TaskRecord {
    let mut record = TaskRecord::new(name, description, group);
    record.last_result = results.get(name).cloned();
    record
}
