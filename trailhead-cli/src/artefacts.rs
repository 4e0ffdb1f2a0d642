//! Input resolution and output helpers shared by the subcommands.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::CliError;

/// Explicit override, else `file_name` inside `artefacts_dir`.
pub(crate) fn resolve_artefact(
    explicit: Option<Utf8PathBuf>,
    artefacts_dir: Option<&Utf8Path>,
    file_name: &str,
    field: &'static str,
    env: &'static str,
) -> Result<Utf8PathBuf, CliError> {
    explicit
        .or_else(|| artefacts_dir.map(|dir| dir.join(file_name)))
        .ok_or(CliError::MissingArgument { field, env })
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match trailhead_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
