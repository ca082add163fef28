use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{InspectError, InspectResult};
use crate::excel::table::header_names;
use crate::excel::{Cell, Table};

/// An opened workbook. Sheet names are read when the file is opened, sheet
/// contents only when `read_sheet` asks for them.
pub struct Workbook {
    source: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> InspectResult<Workbook> {
    let path_ref = path.as_ref();

    if !path_ref.is_file() {
        return Err(InspectError::NotFound(path_ref.to_path_buf()));
    }

    let source = open_workbook_auto(path_ref).map_err(|source| InspectError::Malformed {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let sheet_names = source.sheet_names().to_vec();
    debug!(path = %path_ref.display(), sheets = sheet_names.len(), "opened workbook");

    Ok(Workbook { source, sheet_names })
}

impl Workbook {
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn read_sheet(&mut self, name: &str) -> InspectResult<Table> {
        let range = self
            .source
            .worksheet_range(name)
            .map_err(|source| InspectError::Sheet {
                sheet: name.to_string(),
                source,
            })?;

        let table = table_from_range(&range);
        debug!(
            sheet = name,
            columns = table.columns().len(),
            rows = table.row_count(),
            "read worksheet"
        );

        Ok(table)
    }
}

fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    // First row of the used range is the header
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let header: Vec<Cell> = header.iter().map(Cell::from).collect();
    let columns = header_names(&header);

    Table::from_cells(
        columns,
        rows.map(|row| row.iter().map(Cell::from).collect::<Vec<Cell>>()),
    )
}
