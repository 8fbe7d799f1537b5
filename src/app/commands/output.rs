//! Canonical workflow output helper.
//!
//! Writes compact single-line JSON to stdout, and appends `json=<...>` to
//! `GITHUB_OUTPUT` when set.

use serde::Serialize;
use std::io::Write;

use crate::domain::AppError;

/// Write workflow command output in canonical format.
pub fn write_workflow_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = serde_json::to_string(output).map_err(|e| {
        AppError::InternalError(format!("Failed to serialize workflow output: {}", e))
    })?;

    debug_assert!(!json.contains('\n'), "workflow output JSON must be single-line");

    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "json={}", json)?;
    }

    Ok(())
}
