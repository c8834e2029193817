use std::fmt;

/// Column data type as it appears in the CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    /// 0/1 integer used as a boolean (e.g. `is_hidden`)
    Flag,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Flag => write!(f, "flag"),
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// Source table definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub source_file: &'static str,
    /// Columns that must be present in the header. Extra columns are ignored.
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Returns the first required column missing from `headers`
    pub fn missing_column(&self, headers: &[&str]) -> Option<&'static str> {
        self.column_names()
            .find(|name| !headers.iter().any(|h| h.trim() == *name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: TableSchema = TableSchema {
        name: "sample",
        source_file: "sample.csv",
        columns: &[
            Column::required("id", ColumnType::Integer),
            Column::new("name", ColumnType::Text),
        ],
    };

    #[test]
    fn test_missing_column_none_when_all_present() {
        let headers = ["name", "extra", "id"];
        assert_eq!(SAMPLE.missing_column(&headers), None);
    }

    #[test]
    fn test_missing_column_reports_first_absent() {
        let headers = ["id", "other"];
        assert_eq!(SAMPLE.missing_column(&headers), Some("name"));
    }

    #[test]
    fn test_missing_column_tolerates_padding() {
        let headers = [" id", "name "];
        assert_eq!(SAMPLE.missing_column(&headers), None);
    }
}
