use crate::model::PostProcessError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), PostProcessError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| PostProcessError::WriteError {
            filepath: dirspath.to_str().unwrap_or_default().to_string(),
            error: format!("error building output directory: {e}"),
        })
    } else {
        Ok(())
    }
}

/// reads every row of a CSV file with a header row. a row that fails to
/// decode aborts the read with its (zero-based) row number.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, PostProcessError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let filepath = path.as_ref();
    let filename = filepath.to_str().unwrap_or_default().to_string();
    if !filepath.is_file() {
        return Err(PostProcessError::InputNotFound(filename));
    }
    let mut reader = csv::Reader::from_path(filepath).map_err(|e| PostProcessError::ReadError {
        filepath: filename.clone(),
        error: e.to_string(),
    })?;
    let rows = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(row_idx, row)| {
            row.map_err(|e| PostProcessError::ReadError {
                filepath: filename.clone(),
                error: format!("row {row_idx}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("read {} rows from {filename}", rows.len());
    Ok(rows)
}

/// writes `rows` to a CSV file with a header row, replacing any existing file
pub fn write_csv<T, P>(rows: &[T], path: P) -> Result<(), PostProcessError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let filepath = path.as_ref();
    let write_error = |error: String| PostProcessError::WriteError {
        filepath: filepath.to_str().unwrap_or_default().to_string(),
        error,
    };
    let mut writer = csv::Writer::from_path(filepath).map_err(|e| write_error(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| write_error(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_error(e.to_string()))?;
    log::info!("wrote {} rows to {}", rows.len(), filepath.display());
    Ok(())
}
