use crate::error::{Result, StripTarError};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};
use tar::Archive;

/// Counters accumulated over one streaming pass of the archive.
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub files_written: usize,
    pub dirs_created: usize,
    pub bytes_written: u64,
    pub links_skipped: usize,
    pub members_stripped: usize,
    pub start_time: Instant,
}

impl ExtractionSummary {
    fn new() -> Self {
        Self {
            files_written: 0,
            dirs_created: 0,
            bytes_written: 0,
            links_skipped: 0,
            members_stripped: 0,
            start_time: Instant::now(),
        }
    }

    pub fn members_written(&self) -> usize {
        self.files_written + self.dirs_created
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Remove the first `count` slash-separated components from a member name.
///
/// The name is split into at most `count + 1` parts, so the trailing part
/// keeps any internal `/` characters verbatim. Returns `None` when the name
/// has too few components to survive the strip, or when the remainder is
/// empty (the member *is* one of the stripped directory levels, e.g. a
/// `root/` entry with `count == 1`).
pub fn strip_member_name(name: &str, count: usize) -> Option<String> {
    let parts: Vec<&str> = name.splitn(count + 1, '/').collect();
    if parts.len() <= count {
        return None;
    }

    let stripped = parts[count];
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_string())
}

/// Streams tar members into a destination directory, stripping leading path
/// components and skipping link members.
pub struct TarExtractor {
    strip_components: usize,
}

impl TarExtractor {
    pub fn new(strip_components: usize) -> Self {
        Self { strip_components }
    }

    /// Extract every member of the tar stream under `destination`.
    ///
    /// The reader is consumed front-to-back in a single pass; compressed
    /// sources are not seekable, so members are never revisited. Symbolic
    /// and hard links are reported through `notice` and written nowhere:
    /// creating them requires elevated privileges on some target platforms,
    /// so they are skipped unconditionally rather than failing there.
    ///
    /// Files written before an error surfaces stay on disk; extraction is
    /// not transactional.
    pub fn extract<R: Read>(
        &self,
        reader: R,
        destination: &Path,
        mut notice: impl FnMut(&str),
    ) -> Result<ExtractionSummary> {
        fs::create_dir_all(destination).map_err(|e| StripTarError::Write {
            path: destination.display().to_string(),
            source: e,
        })?;

        let mut archive = Archive::new(reader);
        let mut summary = ExtractionSummary::new();

        let entries = archive
            .entries()
            .map_err(|e| StripTarError::ArchiveRead { source: e })?;

        for entry in entries {
            let mut entry = entry.map_err(|e| StripTarError::ArchiveRead { source: e })?;
            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let kind = entry.header().entry_type();

            if kind.is_symlink() || kind.is_hard_link() {
                notice(&name);
                summary.links_skipped += 1;
                continue;
            }

            let effective_name = match strip_member_name(&name, self.strip_components) {
                Some(stripped) => stripped,
                None => {
                    summary.members_stripped += 1;
                    continue;
                }
            };

            // Joined verbatim: `..` segments surviving the strip are not
            // sanitized, matching the historical behavior of this tool.
            let dest_path = destination.join(&effective_name);
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent).map_err(|e| StripTarError::Write {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }

            let size = entry.size();
            entry.unpack(&dest_path).map_err(|e| StripTarError::Write {
                path: dest_path.display().to_string(),
                source: e,
            })?;

            if kind.is_dir() {
                summary.dirs_created += 1;
            } else {
                summary.files_written += 1;
                summary.bytes_written += size;
            }
        }

        Ok(summary)
    }
}
