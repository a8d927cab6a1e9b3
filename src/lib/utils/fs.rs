use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Returns the canonical form of the given project root, the directory that
/// every relative path of the run hangs from
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let mut canonical = project_root.canonicalize().with_context(|| {
        format!("Error getting the canonical path of the project root: {project_root:?}")
    })?;
    if cfg!(target_os = "windows") {
        // Remove the UNC path prefix that the canonicalization introduces
        canonical = canonical
            .to_str()
            .map(|unc| &unc[4..])
            .unwrap_or_default()
            .into()
    }
    Ok(canonical)
}
