//! Directory listing with a fixed display cap.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Rows shown before the "+N more" summary.
pub const MAX_ROWS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

impl EntryKind {
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Dir => "DIR",
            EntryKind::File => "FILE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// 1-based slot in filesystem order.
    pub position: usize,
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub directory: PathBuf,
    pub entries: Vec<ListedEntry>,
    /// Entries the directory yielded, shown or not.
    pub total: usize,
}

impl Listing {
    /// Entries beyond the display cap.
    pub fn hidden(&self) -> usize {
        self.total.saturating_sub(MAX_ROWS)
    }

    /// Last path component, or the full path for roots.
    pub fn display_name(&self) -> String {
        match self.directory.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.directory.display().to_string(),
        }
    }
}

/// Lists `directory` in the order the filesystem yields entries.
///
/// Only the first [`MAX_ROWS`] slots are inspected. Entries that fail
/// inspection (vanished files, dangling links) are skipped but keep their
/// slot, so positions stay stable.
pub fn list(directory: &Path) -> io::Result<Listing> {
    let raw: Vec<io::Result<fs::DirEntry>> = fs::read_dir(directory)?.collect();
    let total = raw.len();

    let entries = raw
        .into_iter()
        .take(MAX_ROWS)
        .enumerate()
        .filter_map(|(idx, entry)| {
            let entry = entry.ok()?;
            let metadata = fs::metadata(entry.path()).ok()?;
            Some(ListedEntry {
                position: idx + 1,
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: if metadata.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::File
                },
                size: metadata.len(),
            })
        })
        .collect();

    Ok(Listing {
        directory: directory.to_path_buf(),
        entries,
        total,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_list_caps_at_twenty() {
        let dir = tempdir().unwrap();
        for i in 0..25 {
            fs::write(dir.path().join(format!("f{i:02}")), "x").unwrap();
        }
        let listing = list(dir.path()).unwrap();
        assert_eq!(listing.total, 25);
        assert_eq!(listing.entries.len(), 20);
        assert_eq!(listing.hidden(), 5);
    }

    #[test]
    fn test_list_reports_kind_and_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.bin"), vec![0u8; 2048]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let listing = list(dir.path()).unwrap();
        let file = listing.entries.iter().find(|e| e.name == "data.bin").unwrap();
        assert_eq!(file.kind, EntryKind::File);
        assert_eq!(file.size, 2048);
        let sub = listing.entries.iter().find(|e| e.name == "sub").unwrap();
        assert_eq!(sub.kind, EntryKind::Dir);
        assert_eq!(listing.hidden(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_skips_dangling_symlinks() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("real"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let listing = list(dir.path()).unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].name, "real");
    }

    #[test]
    fn test_list_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let err = list(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
