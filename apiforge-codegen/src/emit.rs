//! File emission helpers shared by the backends.
//!
//! The core components hand complete rendered strings to this layer; all
//! file system traffic and logging happens here.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::CodegenError;

/// Writes a complete source file, creating parent directories as needed.
///
/// # Errors
/// Returns `CodegenError::Io` on file system failure.
pub fn write_source_file(path: &Path, text: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Removes `dir` if it exists and recreates it empty.
///
/// # Errors
/// Returns `CodegenError::Io` on file system failure.
pub fn reset_dir(dir: &Path) -> Result<(), CodegenError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Recursively copies a directory tree.
///
/// # Errors
/// Returns `CodegenError::Io` on file system failure.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<(), CodegenError> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Rewrites `src` into `dst`, replacing every occurrence of each key in
/// `replacements` with its value.
///
/// # Errors
/// Returns `CodegenError::Io` on file system failure.
pub fn rewrite_file(
    src: &Path,
    dst: &Path,
    replacements: &BTreeMap<&str, &str>,
) -> Result<(), CodegenError> {
    let mut content = fs::read_to_string(src)?;
    for (key, value) in replacements {
        content = content.replace(key, value);
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dst, &content)?;
    tracing::debug!("rewrote {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Formats a model comment as a block comment, empty string for `None`.
#[must_use]
pub fn to_block_comment(comment: Option<&str>) -> String {
    match comment {
        Some(text) => {
            let body: String = text.lines().map(|l| format!(" * {l}\n")).collect();
            format!("/*\n{body} */")
        }
        None => String::new(),
    }
}

/// Formats a model comment as line comments, empty string for `None`.
#[must_use]
pub fn to_line_comment(comment: Option<&str>) -> String {
    match comment {
        Some(text) => text
            .lines()
            .map(|l| format!("// {l}"))
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_source_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/Out.java");
        write_source_file(&path, "class Out {}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Out {}\n");
    }

    #[test]
    fn test_reset_dir_clears_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.txt"), "old").unwrap();

        reset_dir(&out).unwrap();
        assert!(out.exists());
        assert!(!out.join("stale.txt").exists());
    }

    #[test]
    fn test_copy_dir_all_recurses() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("top.txt"), "t").unwrap();
        fs::write(src.join("nested/deep.txt"), "d").unwrap();

        let dst = dir.path().join("dst");
        copy_dir_all(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "t");
        assert_eq!(fs::read_to_string(dst.join("nested/deep.txt")).unwrap(), "d");
    }

    #[test]
    fn test_rewrite_file_replaces_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.gradle");
        fs::write(&src, "name = '{{project_name}}'\nversion = '{{project_version}}'\n").unwrap();

        let dst = dir.path().join("out.gradle");
        let mut map = BTreeMap::new();
        map.insert("{{project_name}}", "Demo");
        map.insert("{{project_version}}", "1.2.3");
        rewrite_file(&src, &dst, &map).unwrap();

        assert_eq!(
            fs::read_to_string(&dst).unwrap(),
            "name = 'Demo'\nversion = '1.2.3'\n"
        );
    }

    #[test]
    fn test_comment_helpers() {
        assert_eq!(to_block_comment(None), "");
        assert_eq!(to_block_comment(Some("hi")), "/*\n * hi\n */");
        assert_eq!(to_line_comment(Some("a\nb")), "// a\n// b");
    }
}
