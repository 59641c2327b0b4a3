//! CLI output formatting.

use workshop_core::history::HistoryEntry;
use workshop_core::registry::StrategyId;
use workshop_orchestration::RunRecord;

/// Heading shown above the history panel.
pub const HISTORY_HEADING: &str = "Global History (Last 5 Runs)";

/// Placeholder shown when nothing has run yet.
pub const EMPTY_HISTORY: &str = "No algorithms run yet.";

/// History lines, most recent first.
#[must_use]
pub fn format_history(entries: &[HistoryEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![EMPTY_HISTORY.to_string()];
    }
    entries.iter().rev().map(ToString::to_string).collect()
}

/// Numbered menu of strategies, starting at 1.
#[must_use]
pub fn format_menu(ids: &[StrategyId]) -> Vec<String> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| format!("{:>2}. {}", i + 1, id.label()))
        .collect()
}

/// Resolve a menu answer: a 1-based number, an exact label, or a slug.
#[must_use]
pub fn parse_menu_choice(answer: &str, ids: &[StrategyId]) -> Option<StrategyId> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| ids.get(i)).copied();
    }
    StrategyId::from_label(answer)
        .or_else(|| StrategyId::from_slug(answer))
        .filter(|id| ids.contains(id))
}

/// Serialize a run record as pretty JSON.
pub fn format_json(record: &RunRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}
