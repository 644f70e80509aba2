//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::TrackingRecord;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking one card against its board's rules
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Card identifier
    pub card_id: String,
    /// Card title
    pub card_name: String,
    /// Number of rules evaluated
    pub rules_checked: usize,
    /// Whether every rule passed
    pub valid: bool,
    /// Failed rule messages, in rule order
    pub errors: Vec<String>,
}

/// Cards currently tracked as violating their rules
#[derive(Debug, Serialize)]
pub struct TrackedList {
    /// Tracking records
    pub records: Vec<TrackingRecord>,
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let title = format!("{} ({})", self.card_name, self.card_id);
        if self.rules_checked == 0 {
            return format!("{title}\nNo rules apply.");
        }
        if self.valid {
            return format!("{title}\n{} {} rule(s) passed", "OK".green().bold(), self.rules_checked);
        }

        let mut out = format!("{title}\n");
        for error in &self.errors {
            out.push_str(&format!("  - {error}\n"));
        }
        out.push_str(&format!(
            "{} {} of {} rule(s) failed",
            "INVALID".red().bold(),
            self.errors.len(),
            self.rules_checked
        ));
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl TrackedList {
    /// Render the list based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.records.is_empty() {
            println!("No cards are tracked.");
            return;
        }

        println!("Tracked cards:\n");
        for record in &self.records {
            let name = record.card_name.as_deref().unwrap_or("-");
            println!("  [{}] {name}", record.card_id);
            println!("  since {}\n", record.created_at);
        }
    }
}
