//! Small pure helpers for the admin panel.

use console_common::csv::ColumnRole;

/// Monotonic counter identifying file reads. Only the result of the latest read is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadGeneration(u64);

impl ReadGeneration {
    /// Starts a new read and returns its generation.
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Makes any outstanding read stale without starting a new one.
    pub fn invalidate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// CSS class of a preview header cell for the role of its column.
pub fn role_class(role: ColumnRole) -> &'static str {
    match role {
        ColumnRole::Content => "col-content",
        ColumnRole::DocId => "col-id",
        ColumnRole::Metadata => "col-metadata",
    }
}

/// Note under the preview table for the columns beyond the first `shown`.
pub fn hidden_columns_hint(roles: &[(&str, ColumnRole)], shown: usize) -> Option<String> {
    let hidden = roles.get(shown..).filter(|h| !h.is_empty())?;
    let mut parts = Vec::new();
    for (header, role) in hidden {
        match role {
            ColumnRole::Content => parts.push(format!("content column '{header}'")),
            ColumnRole::DocId => parts.push(format!("id column '{header}'")),
            ColumnRole::Metadata => {}
        }
    }
    let metadata = hidden
        .iter()
        .filter(|(_, role)| *role == ColumnRole::Metadata)
        .count();
    if metadata > 0 {
        parts.push(format!("{metadata} stored as metadata"));
    }
    let noun = if hidden.len() == 1 { "column" } else { "columns" };
    Some(format!("+{} more {noun}: {}", hidden.len(), parts.join(", ")))
}

/// Banner text after a successful upload.
pub fn upload_summary(file_name: &str, index: &str, documents: Option<u64>) -> String {
    match documents {
        Some(1) => format!("Uploaded {file_name}: 1 document ingested into '{index}'"),
        Some(n) => format!(
            "Uploaded {file_name}: {} documents ingested into '{index}'",
            crate::components::helpers::format_count(n)
        ),
        None => format!("Uploaded {file_name} into '{index}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_read_is_current() {
        let mut reads = ReadGeneration::default();
        let first = reads.next();
        let second = reads.next();
        assert!(!reads.is_current(first));
        assert!(reads.is_current(second));

        reads.invalidate();
        assert!(!reads.is_current(second));
    }

    #[test]
    fn hidden_hint_names_roles_beyond_the_preview() {
        let roles = [
            ("title", ColumnRole::Metadata),
            ("year", ColumnRole::Metadata),
            ("author", ColumnRole::Metadata),
            ("venue", ColumnRole::Metadata),
            ("abstract", ColumnRole::Content),
            ("doi", ColumnRole::DocId),
            ("tags", ColumnRole::Metadata),
        ];
        assert_eq!(
            hidden_columns_hint(&roles, 4).as_deref(),
            Some("+3 more columns: content column 'abstract', id column 'doi', 1 stored as metadata")
        );
        assert_eq!(
            hidden_columns_hint(&roles[..5], 4).as_deref(),
            Some("+1 more column: content column 'abstract'")
        );
        assert_eq!(hidden_columns_hint(&roles[..4], 4), None);
    }

    #[test]
    fn upload_summary_mentions_count() {
        assert_eq!(
            upload_summary("papers.csv", "docs", Some(1200)),
            "Uploaded papers.csv: 1,200 documents ingested into 'docs'"
        );
        assert_eq!(
            upload_summary("a.csv", "docs", Some(1)),
            "Uploaded a.csv: 1 document ingested into 'docs'"
        );
        assert_eq!(upload_summary("a.csv", "docs", None), "Uploaded a.csv into 'docs'");
    }
}
