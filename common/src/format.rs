//! Display helpers shared by the result views.

/// Characters of document content shown before the "show more" toggle.
pub const CONTENT_PREVIEW_CHARS: usize = 300;

/// Embedding values shown for a hit with vectors.
pub const EMBEDDING_PREVIEW_VALUES: usize = 10;

/// Cell width in the CSV upload preview table.
pub const PREVIEW_CELL_CHARS: usize = 30;

/// Columns shown in the CSV upload preview table.
pub const PREVIEW_COLUMNS: usize = 4;

/// Supporting documents listed under a summary.
pub const SUMMARY_SUPPORTING_DOCS: usize = 5;

/// Confidence band of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score > 0.8 {
            ScoreBand::High
        } else if score > 0.5 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::High => "score-high",
            ScoreBand::Medium => "score-medium",
            ScoreBand::Low => "score-low",
        }
    }
}

/// `0.8734` -> `"87.3%"`.
pub fn score_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Cuts `text` to at most `max_chars` characters, appending `...` when something was cut.
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// `true` when [`truncate`] would cut `text`.
pub fn is_truncated(text: &str, max_chars: usize) -> bool {
    text.chars().nth(max_chars).is_some()
}

/// Milliseconds below one second, seconds with one decimal otherwise.
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// First [`EMBEDDING_PREVIEW_VALUES`] components to four decimals, `...` if there are more.
pub fn embedding_preview(values: &[f64]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(EMBEDDING_PREVIEW_VALUES)
        .map(|v| format!("{v:.4}"))
        .collect();
    let more = if values.len() > EMBEDDING_PREVIEW_VALUES { ", ..." } else { "" };
    format!("[{}{more}]", shown.join(", "))
}
