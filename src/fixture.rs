//! Generates a browser-side script that replays an upload of a sample
//! workbook. The script gets its parse and persistence services passed in
//! rather than reaching for page globals inside the harness.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_SAMPLE_PATH: &str = "docs/sample.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = ".tmp/sim_upload.js";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const TEMPLATE: &str = r#"async function simulateUpload({ parser, store, reinit }) {
    const base64 = "__BASE64__";
    const byteCharacters = atob(base64);
    const byteArray = new Uint8Array(byteCharacters.length);
    for (let i = 0; i < byteCharacters.length; i++) {
        byteArray[i] = byteCharacters.charCodeAt(i);
    }
    const blob = new Blob([byteArray], { type: '__MIME__' });
    const file = new File([blob], '__FILE_NAME__', { type: '__MIME__' });

    console.log('[Test] Simulating upload...');
    try {
        const exercises = await parser.parseFile(file);
        console.log('[Test] Parsed exercises:', exercises.length);
        await store.saveExercises(exercises);
        console.log('[Test] Saved to DB');

        if (typeof reinit === 'function') {
            await reinit();
            console.log('[Test] App Re-initialized');
        }
        return "Success: " + exercises.length + " exercises uploaded.";
    } catch (err) {
        console.error('[Test] Simulation failed:', err);
        return "Error: " + err.message;
    }
}

simulateUpload({
    parser: Excel,
    store: DB,
    reinit: (typeof App !== 'undefined' && App.init) ? () => App.init() : null,
});
"#;

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureOutcome {
    Written { output: PathBuf, bytes: usize },
    SampleMissing(PathBuf),
}

/// Build the upload-simulation script for the workbook bytes in `data`.
pub fn render_upload_script(data: &[u8], file_name: &str) -> String {
    let encoded = STANDARD.encode(data);

    TEMPLATE
        .replace("__BASE64__", &encoded)
        .replace("__MIME__", XLSX_MIME)
        .replace("__FILE_NAME__", &escape_js_single_quoted(file_name))
}

fn escape_js_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Read `sample` and write the generated script to `output`.
///
/// A missing sample is not an error: nothing is written and
/// `FixtureOutcome::SampleMissing` is returned.
pub fn generate_upload_script(sample: &Path, output: &Path) -> Result<FixtureOutcome> {
    if !sample.is_file() {
        info!(path = %sample.display(), "sample workbook not found");
        return Ok(FixtureOutcome::SampleMissing(sample.to_path_buf()));
    }

    let data = fs::read(sample)
        .with_context(|| format!("Failed to read sample workbook: {}", sample.display()))?;
    debug!(path = %sample.display(), bytes = data.len(), "read sample workbook");

    let file_name = sample
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("sample.xlsx");
    let script = render_upload_script(&data, file_name);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(output, script)
        .with_context(|| format!("Failed to write file: {}", output.display()))?;
    info!(path = %output.display(), "wrote upload simulation script");

    Ok(FixtureOutcome::Written {
        output: output.to_path_buf(),
        bytes: data.len(),
    })
}
