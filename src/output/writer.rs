// Destinations for rendered results.
//
// Files are written through a temporary file in the target directory and
// renamed into place, so a failed write never leaves a partial file behind
// or clobbers an existing one. The temporary file is removed on drop if the
// rename never happens.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output (or whatever writer the caller supplied for it)
    Console,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Console => f.write_str("<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write `bytes` to `path` all-or-nothing.
pub fn write_file_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    // Temp files are created 0600; results are ordinary files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write `bytes` to the console stream in one go and flush it.
pub fn write_console<W: Write>(console: &mut W, bytes: &[u8]) -> io::Result<()> {
    console.write_all(bytes)?;
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("repotopics-writer-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_atomic_write_replaces_existing_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("out.json");
        std::fs::write(&path, b"old contents").unwrap();

        write_file_atomically(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");

        // Only the target remains; the temp file was renamed away.
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_atomic_write_missing_parent_creates_nothing() {
        let dir = scratch_dir("missing-parent");
        let path = dir.join("no-such-dir").join("out.json");

        let err = write_file_atomically(&path, b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_atomic_write_onto_directory_leaves_no_temp_file() {
        let dir = scratch_dir("onto-dir");
        let target = dir.join("taken");
        std::fs::create_dir(&target).unwrap();

        assert!(write_file_atomically(&target, b"data").is_err());
        // Only the pre-existing directory is left.
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Console.to_string(), "<stdout>");
        assert_eq!(
            Destination::File(PathBuf::from("results/out.csv")).to_string(),
            "results/out.csv"
        );
    }
}
