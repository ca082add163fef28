mod cell;
mod table;
mod workbook;

pub use cell::Cell;
pub use table::{Row, Table};
pub use workbook::{Workbook, open_workbook};
