//! Task status and color helpers
//!
//! Consistent group colors and a coarse run status for terminal rendering.

use colored::*;
use gradle_tasks_protocol::TaskRecord;

/// Coarse state of a task for status indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Not run in this session
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl TaskStatus {
    pub fn of(task: &TaskRecord) -> Self {
        match task.last_succeeded() {
            None => Self::Pending,
            Some(true) => Self::Succeeded,
            Some(false) => Self::Failed,
        }
    }

    pub fn symbol(&self) -> ColoredString {
        match self {
            Self::Pending => "○".dimmed(),
            Self::Running => "⏳".yellow(),
            Self::Succeeded => "✓".green().bold(),
            Self::Failed => "✗".red().bold(),
        }
    }
}

/// Get a consistent color for a group name
pub fn get_group_color(group_name: &str) -> Color {
    // Simple hash of the group name bytes for consistent colors
    let hash = group_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label colors that stay clear of the red/green used for run status
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        }, // Medium slate blue
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        }, // Turquoise
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        }, // Dark orange
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        }, // Medium violet red
        Color::TrueColor {
            r: 100,
            g: 149,
            b: 237,
        }, // Cornflower blue
    ];

    colors[(hash % colors.len() as u64) as usize]
}
