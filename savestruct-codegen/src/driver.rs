//! End-to-end runs: read a header, generate, write both artifacts.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::Generator;
use savestruct_schema::validate_selection;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Paths and records of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// Interface artifact path.
    pub interface: PathBuf,
    /// Implementation artifact path.
    pub implementation: PathBuf,
    /// Records that received code, in output order.
    pub records: Vec<String>,
}

/// Generates code for `input` and writes it next to `output_base`.
///
/// Nothing is written unless the input was read and both artifacts were
/// rendered. Selection problems (allow-list entries matching nothing,
/// duplicate or empty records) are logged as warnings and do not fail the
/// run.
///
/// # Arguments
/// * `input` - C header to read
/// * `output_base` - Output path without extension, e.g. `src/savegame`
/// * `config` - Generator settings
///
/// # Errors
/// Returns `CodegenError` if the input cannot be read, the base has no file
/// name, or an artifact cannot be written.
pub fn run(
    input: &Path,
    output_base: &Path,
    config: &GeneratorConfig,
) -> Result<Written, CodegenError> {
    let (dir, base) = split_base(output_base)?;
    let ir = savestruct_schema::parse_header_file(input)?;
    tracing::debug!("{}: {} records extracted", input.display(), ir.len());

    for issue in validate_selection(&ir, &config.selection()) {
        tracing::warn!("{}", issue);
    }

    let artifacts = Generator::new(&ir, config).generate(base);
    let interface = dir.join(&artifacts.interface.file_name);
    let implementation = dir.join(&artifacts.implementation.file_name);
    write_atomically(&[
        (interface.as_path(), artifacts.interface.contents.as_str()),
        (
            implementation.as_path(),
            artifacts.implementation.contents.as_str(),
        ),
    ])?;

    tracing::info!(
        "wrote {} and {} ({} records)",
        interface.display(),
        implementation.display(),
        artifacts.records.len()
    );
    Ok(Written {
        interface,
        implementation,
        records: artifacts.records,
    })
}

/// Writes every file through a temporary sibling, then renames them all.
///
/// All contents are staged before the first rename, so a failure while
/// staging leaves existing files untouched and no temporary files behind.
/// If a rename fails, the files already renamed are put back the way they
/// were: previous contents restored, new files removed. Each rename is
/// atomic on its own; the set is not, so a crash between renames can still
/// leave a mix of old and new files.
///
/// # Errors
/// Returns `CodegenError::Write` naming the file that failed.
pub fn write_atomically(files: &[(&Path, &str)]) -> Result<(), CodegenError> {
    let mut staged = Vec::with_capacity(files.len());
    for &(path, contents) in files {
        let file = stage(path, contents.as_bytes())?;
        let previous = if path.is_file() {
            Some(fs::read(path).map_err(|e| CodegenError::write(path, e))?)
        } else {
            None
        };
        staged.push((file, path, previous));
    }

    let mut renamed: Vec<(&Path, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for (file, path, previous) in staged {
        if let Err(e) = file.persist(path) {
            roll_back(&renamed);
            return Err(CodegenError::write(path, e.error));
        }
        tracing::debug!("renamed into {}", path.display());
        renamed.push((path, previous));
    }
    Ok(())
}

/// Writes `contents` to a temporary file next to `path`.
fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile, CodegenError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::Builder::new()
        .prefix(".savestruct-")
        .tempfile_in(dir)
        .map_err(|e| CodegenError::write(path, e))?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| CodegenError::write(path, e))?;
    Ok(file)
}

/// Undoes completed renames after a later one failed.
fn roll_back(renamed: &[(&Path, Option<Vec<u8>>)]) {
    for &(path, ref previous) in renamed.iter().rev() {
        let restored = match previous {
            Some(bytes) => stage(path, bytes).and_then(|file| {
                file.persist(path)
                    .map(drop)
                    .map_err(|e| CodegenError::write(path, e.error))
            }),
            None => fs::remove_file(path).map_err(|e| CodegenError::write(path, e)),
        };
        match restored {
            Ok(()) => tracing::debug!("rolled back {}", path.display()),
            Err(e) => tracing::warn!("cannot roll back {}: {}", path.display(), e),
        }
    }
}

/// Splits an output base into its directory and file name.
fn split_base(output_base: &Path) -> Result<(PathBuf, &str), CodegenError> {
    let base = output_base
        .file_name()
        .ok_or_else(|| CodegenError::output_base(output_base, "no file name"))?
        .to_str()
        .ok_or_else(|| CodegenError::output_base(output_base, "file name is not UTF-8"))?;
    let dir = output_base
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, base))
}
