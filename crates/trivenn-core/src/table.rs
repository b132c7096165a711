use serde::{Deserialize, Serialize};

/// One editable row of the input form. Either side may be left blank; blank
/// rows are dropped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub center: String,
    /// Comma-separated list of surface functions, as typed.
    pub functions: String,
}

impl RawEntry {
    pub fn new(center: impl Into<String>, functions: impl Into<String>) -> Self {
        Self {
            center: center.into(),
            functions: functions.into(),
        }
    }
}

/// One `(center, function)` association after list splitting.
///
/// `function` is always trimmed and non-empty. `center` may be empty: a row
/// typed with functions but no center keeps the empty-string center label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub center: String,
    pub function: String,
}

/// Explodes raw form entries into flat rows.
///
/// Entries blank on both sides are skipped. The function list is split on
/// commas, every token is trimmed, and empty tokens are dropped, so an entry
/// whose list collapses to nothing contributes no rows even when its center
/// is non-empty. Input order is preserved.
pub fn normalize_entries(entries: &[RawEntry]) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for entry in entries {
        let center = entry.center.trim();
        let functions = entry.functions.trim();
        if center.is_empty() && functions.is_empty() {
            continue;
        }
        for token in functions.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            rows.push(FlatRow {
                center: center.to_string(),
                function: token.to_string(),
            });
        }
    }
    tracing::debug!(
        entries = entries.len(),
        rows = rows.len(),
        "normalized form entries"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_comma_lists() {
        let rows = normalize_entries(&[RawEntry::new("North", "A, B ,C")]);
        assert_eq!(
            rows,
            vec![
                FlatRow {
                    center: "North".to_string(),
                    function: "A".to_string()
                },
                FlatRow {
                    center: "North".to_string(),
                    function: "B".to_string()
                },
                FlatRow {
                    center: "North".to_string(),
                    function: "C".to_string()
                },
            ]
        );
    }

    #[test]
    fn blank_entry_contributes_nothing() {
        assert!(normalize_entries(&[RawEntry::new("  ", "")]).is_empty());
    }

    #[test]
    fn center_without_functions_contributes_nothing() {
        assert!(normalize_entries(&[RawEntry::new("North", "  ,  , ")]).is_empty());
    }

    #[test]
    fn function_without_center_keeps_empty_center() {
        let rows = normalize_entries(&[RawEntry::new("", "alpha")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].center, "");
        assert_eq!(rows[0].function, "alpha");
    }

    #[test]
    fn every_row_is_trimmed_and_non_empty() {
        let entries = [
            RawEntry::new(" North ", " alpha ,beta"),
            RawEntry::new("South", "gamma,,  "),
            RawEntry::new("", ""),
        ];
        let rows = normalize_entries(&entries);
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(!row.function.is_empty());
            assert_eq!(row.function, row.function.trim());
            assert_eq!(row.center, row.center.trim());
        }
    }

    #[test]
    fn input_order_is_preserved() {
        let entries = [
            RawEntry::new("B", "two"),
            RawEntry::new("A", "one, three"),
        ];
        let rows = normalize_entries(&entries);
        let functions: Vec<&str> = rows.iter().map(|r| r.function.as_str()).collect();
        assert_eq!(functions, vec!["two", "one", "three"]);
    }
}
