use crate::record::RawRow;

/// Configuration for splitting raw text into rows and fields
///
/// Defaults match the conventional CSV shape: newline-terminated rows,
/// comma-separated fields, first row treated as a header and dropped.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub remove_header: bool,
    pub end_of_row: String,
    pub divider: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            remove_header: true,
            end_of_row: "\n".to_string(),
            divider: ",".to_string(),
        }
    }
}

/// Split raw text into rows of fields
///
/// No trimming happens here: field text is preserved exactly, so re-joining
/// the fields with the same delimiters reconstructs the original row text.
/// Empty input yields an empty row sequence regardless of the header flag.
#[must_use]
pub fn split_records(text: &str, config: &SplitConfig) -> Vec<RawRow> {
    if text.is_empty() {
        return vec![];
    }

    let mut rows: Vec<RawRow> = text
        .split(config.end_of_row.as_str())
        .map(|line| {
            line.split(config.divider.as_str())
                .map(str::to_string)
                .collect()
        })
        .collect();

    if config.remove_header && !rows.is_empty() {
        rows.remove(0);
    }

    rows
}
