use indexmap::IndexMap;

use crate::excel::Cell;

/// One data row, keyed by column name in table column order.
pub type Row = IndexMap<String, Cell>;

/// The contents of one sheet: a header of unique column names and the data
/// rows below it. Tables are never modified in place; transformations build
/// a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from positional cell rows. Rows shorter than the header
    /// are padded with `Cell::Empty`, longer rows are cut to the header width.
    pub fn from_cells<I>(columns: Vec<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let rows: Vec<Row> = cells
            .into_iter()
            .map(|mut values| {
                values.resize(columns.len(), Cell::Empty);
                columns.iter().cloned().zip(values).collect::<Row>()
            })
            .collect();

        Self { columns, rows }
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cells of one column, top to bottom. Empty when the column is absent.
    pub fn column(&self, name: &str) -> Vec<&Cell> {
        self.rows.iter().filter_map(|row| row.get(name)).collect()
    }
}

// Header names the way the reference reader labels them: blank headers become
// "Unnamed: <index>", repeats get ".1", ".2", ... suffixes
pub(crate) fn header_names(header: &[Cell]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let base = match cell {
            Cell::Empty => format!("Unnamed: {}", idx),
            other => other.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(name);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_rows_are_padded() {
        let table = Table::from_cells(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![Cell::Number(1.0)]],
        );

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0].get("B"), Some(&Cell::Empty));
        assert_eq!(table.column("A"), vec![&Cell::Number(1.0)]);
    }

    #[test]
    fn row_keys_follow_column_order() {
        let table = Table::from_cells(
            vec!["B".to_string(), "A".to_string()],
            vec![vec![Cell::text("b"), Cell::text("a")]],
        );

        let keys: Vec<&String> = table.rows()[0].keys().collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn blank_and_duplicate_headers() {
        let header = vec![
            Cell::text("Sets"),
            Cell::Empty,
            Cell::text("Sets"),
            Cell::Number(2024.0),
            Cell::text("Sets"),
        ];

        assert_eq!(
            header_names(&header),
            vec!["Sets", "Unnamed: 1", "Sets.1", "2024", "Sets.2"]
        );
    }
}
