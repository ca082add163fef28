use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::{ZipArchive, ZipWriter};

// Sheets "Jan", "Feb", "Mar" where the part behind "Feb" is missing from the
// package, so the workbook opens but that one sheet cannot be read
pub fn write_workbook_with_unreadable_sheet(dir: &Path) -> PathBuf {
    let intact = dir.join("intact.xlsx");
    let mut workbook = XlsxWorkbook::new();
    for (name, exercise) in [("Jan", "Squat"), ("Feb", "Bench"), ("Mar", "Deadlift")] {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).unwrap();
        sheet.write_string(0, 0, "Exercise").unwrap();
        sheet.write_string(1, 0, exercise).unwrap();
    }
    workbook.save(&intact).unwrap();

    let broken = dir.join("missing_part.xlsx");
    let mut archive = ZipArchive::new(File::open(&intact).unwrap()).unwrap();
    let mut writer = ZipWriter::new(File::create(&broken).unwrap());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).unwrap();
        if entry.name() == "xl/worksheets/sheet2.xml" {
            continue;
        }
        writer.raw_copy_file(entry).unwrap();
    }
    writer.finish().unwrap();

    broken
}
