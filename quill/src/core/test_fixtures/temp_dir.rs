// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;

/// A uniquely named folder under [`std::env::temp_dir`], deleted when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("quill_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_deleted_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let copy_of_path = temp_dir.inner.clone();
        std::fs::write(temp_dir.join("file.txt"), b"abc").unwrap();
        assert!(copy_of_path.exists());

        drop(temp_dir);
        assert!(!copy_of_path.exists());
    }
}
