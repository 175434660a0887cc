use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `content`, via a temp file in the same directory and a rename.
///
/// An existing file keeps its permissions. A new file gets the same mode a
/// plain create would (0666 less the umask on unix).
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // the mode passed at creation is masked by the umask
    Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMBINED_LICENSE");
        write_output(&path, "<b>・A</b> by a<br>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<b>・A</b> by a<br>");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMBINED_LICENSE");
        std::fs::write(&path, "a much longer previous run output").unwrap();
        write_output(&path, "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMBINED_LICENSE");
        for expected in [0o644, 0o640, 0o664] {
            std::fs::write(&path, "old").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(expected)).unwrap();

            write_output(&path, "new").unwrap();

            assert_eq!(mode(&path), expected);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_plain_create_mode() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain");
        std::fs::write(&plain, "x").unwrap();

        let path = dir.path().join("COMBINED_LICENSE");
        write_output(&path, "x").unwrap();

        assert_eq!(mode(&path), mode(&plain));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("COMBINED_LICENSE");
        assert!(write_output(&path, "x").is_err());
    }
}
