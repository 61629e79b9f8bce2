use crate::app::error::{Result, ScanError};
use crate::app::models::StatsNode;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Compiled folder and file exclusion patterns, matched against bare names.
pub struct ExcludeMatcher {
    folder_set: GlobSet,
    file_set: GlobSet,
}

impl ExcludeMatcher {
    pub fn new(folders: &[String], files: &[String]) -> Result<Self> {
        Ok(Self {
            folder_set: build_globset(folders)?,
            file_set: build_globset(files)?,
        })
    }

    pub fn skips_folder(&self, name: &str) -> bool {
        self.folder_set.is_match(name)
    }

    pub fn skips_file(&self, name: &str) -> bool {
        self.file_set.is_match(name)
    }
}

/// Builds line and file counts for `root`, skipping excluded names at every level.
///
/// Entries that cannot be read below the root are logged and left out; only a
/// missing or unreadable root is an error.
pub fn build_stats(
    root: &Path,
    exclude_folders: &[String],
    exclude_files: &[String],
) -> Result<StatsNode> {
    let matcher = ExcludeMatcher::new(exclude_folders, exclude_files)?;

    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    let metadata = fs::metadata(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        build_dir(root, &matcher).map_err(|source| ScanError::Walk {
            path: root.to_path_buf(),
            source,
        })
    } else {
        let lines = count_lines(root).map_err(|source| ScanError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(StatsNode::File { lines })
    }
}

/// Fails only when `dir` itself cannot be listed.
fn build_dir(
    dir: &Path,
    matcher: &ExcludeMatcher,
) -> std::result::Result<StatsNode, ignore::Error> {
    let mut node = StatsNode::empty_dir();

    // Depth 1 only: recursion is ours so exclusions can prune whole subtrees.
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == Some(0) => return Err(err),
            Err(err) => {
                log::warn!("Error walking entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_symlink() {
            log::debug!("Skipping symlink {}", path.display());
        } else if file_type.is_dir() {
            if matcher.skips_folder(&name) {
                log::debug!("Excluded folder {}", path.display());
                continue;
            }
            match build_dir(path, matcher) {
                Ok(child) => node.push_entry(name, child),
                Err(err) => log::warn!("Skipping unreadable folder {}: {}", path.display(), err),
            }
        } else if file_type.is_file() {
            if matcher.skips_file(&name) {
                log::debug!("Excluded file {}", path.display());
                continue;
            }
            match count_lines(path) {
                Ok(lines) => node.push_entry(name, StatsNode::File { lines }),
                Err(err) => log::warn!("Skipping unreadable file {}: {}", path.display(), err),
            }
        } else {
            log::debug!("Skipping special file {}", path.display());
        }
    }

    Ok(node)
}

/// Counts `\n` separators, plus one for trailing content without a final newline.
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; 8192];
    let mut lines = 0u64;
    let mut last = None;

    loop {
        let read = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        let chunk = &buf[..read];
        lines += chunk.iter().filter(|&&b| b == b'\n').count() as u64;
        last = chunk.last().copied();
    }

    if matches!(last, Some(b) if b != b'\n') {
        lines += 1;
    }
    Ok(lines)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).map_err(|source| ScanError::InvalidPattern {
            pattern: pat.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ScanError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}
