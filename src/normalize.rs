use crate::excel::{Cell, Row, Table};

/// Fill empty cells of `column` with the closest non-empty value above them.
///
/// A leading run of empty cells stays empty. Tables without the column are
/// returned unchanged.
pub fn forward_fill(table: &Table, column: &str) -> Table {
    if !table.has_column(column) {
        return table.clone();
    }

    let mut last_value: Option<Cell> = None;

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            if let Some(cell) = row.get_mut(column) {
                match cell {
                    Cell::Empty => {
                        if let Some(value) = &last_value {
                            *cell = value.clone();
                        }
                    }
                    Cell::Text(_) | Cell::Number(_) => last_value = Some(cell.clone()),
                }
            }
            row
        })
        .collect();

    Table::from_parts(table.columns().to_vec(), rows)
}

/// Keep only the `desired` columns that the table has, in `desired` order.
///
/// Names missing from the table are skipped; a name listed twice is kept once.
pub fn project_columns<S: AsRef<str>>(table: &Table, desired: &[S]) -> Table {
    let mut columns: Vec<String> = Vec::with_capacity(desired.len());
    for name in desired {
        let name = name.as_ref();
        if table.has_column(name) && !columns.iter().any(|c| c == name) {
            columns.push(name.to_string());
        }
    }

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|name| {
                    let cell = row.get(name).cloned().unwrap_or(Cell::Empty);
                    (name.clone(), cell)
                })
                .collect::<Row>()
        })
        .collect();

    Table::from_parts(columns, rows)
}
