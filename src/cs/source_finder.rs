//! Source file discovery for C# files
//!
//! A target is either a single `.cs` file or a directory searched
//! recursively. Build output (`bin`, `obj`) and hidden directories are
//! skipped. Results are sorted so runs are reproducible.

use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use tokio::fs;
use super::constants::CS_EXTENSION;

/// Directory names never descended into
const SKIPPED_DIRECTORIES: &[&str] = &["bin", "obj"];

/// Find every C# source file below `target`
pub async fn find_cs_files(target: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(target)
        .await
        .with_context(|| format!("Invalid target path: {}", target.display()))?;

    if metadata.is_file() {
        if !is_cs_file(target) {
            return Err(anyhow!("Not a C# source file: {}", target.display()));
        }
        return Ok(vec![target.to_path_buf()]);
    }

    let mut files = find_cs_files_in_dir(target).await?;
    files.sort();
    Ok(files)
}

/// Read a source file as UTF-8 text
pub async fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}

fn is_cs_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(CS_EXTENSION))
        .unwrap_or(false)
}

fn is_skipped_dir(path: &Path) -> bool {
    match path.file_name().and_then(|s| s.to_str()) {
        Some(name) => name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name),
        None => false,
    }
}

/// Recursively find all .cs files in a directory
fn find_cs_files_in_dir<'a>(
    dir: &'a Path,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<PathBuf>>> + 'a>> {
    Box::pin(async move {
        let mut cs_files = Vec::new();

        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let file_type = entry.file_type().await?;
            if file_type.is_file() && is_cs_file(&path) {
                cs_files.push(path);
            } else if file_type.is_dir() && !is_skipped_dir(&path) {
                // Recursively search subdirectories
                let mut sub_files = find_cs_files_in_dir(&path).await?;
                cs_files.append(&mut sub_files);
            }
        }

        Ok(cs_files)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "class C { }").unwrap();
    }

    #[tokio::test]
    async fn test_find_cs_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "A.cs");
        write(root, "Sub/B.CS");
        write(root, "Sub/Deeper/C.cs");
        write(root, "Sub/readme.md");
        write(root, "obj/Generated.cs");
        write(root, "bin/Debug/Other.cs");
        write(root, ".hidden/D.cs");

        let files = find_cs_files(root).await.unwrap();
        let relative: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(relative, vec!["A.cs", "Sub/B.CS", "Sub/Deeper/C.cs"]);
    }

    #[tokio::test]
    async fn test_single_file_target() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Only.cs");
        let target = temp_dir.path().join("Only.cs");

        let files = find_cs_files(&target).await.unwrap();
        assert_eq!(files, vec![target.clone()]);
        assert_eq!(read_source(&target).await.unwrap(), "class C { }");
    }

    #[tokio::test]
    async fn test_invalid_targets() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_cs_files(&temp_dir.path().join("missing")).await.is_err());

        write(temp_dir.path(), "notes.txt");
        assert!(find_cs_files(&temp_dir.path().join("notes.txt")).await.is_err());
    }
}
