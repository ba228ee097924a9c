use crate::error::{Result, StripTarError};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use xz2::read::XzDecoder;

/// Compression wrapper applied around the raw tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Xz,
    Gzip,
    None,
}

impl Compression {
    /// Infer the compression from the filename suffix. The match is
    /// case-sensitive and exact; anything unrecognized is treated as a
    /// plain tar stream.
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        Self::from_name(&name)
    }

    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            Compression::Xz
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Compression::Gzip
        } else {
            Compression::None
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Xz => write!(f, "xz"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::None => write!(f, "none"),
        }
    }
}

/// Open the archive file and wrap it in the decompressor selected by its
/// filename suffix. The returned reader is forward-only; compressed streams
/// cannot be seeked, so callers must consume it front-to-back.
pub fn open_archive(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| StripTarError::ArchiveOpen {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    Ok(match Compression::from_path(path) {
        Compression::Xz => Box::new(XzDecoder::new(reader)),
        Compression::Gzip => Box::new(GzDecoder::new(reader)),
        Compression::None => Box::new(reader),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_xz_suffixes() {
        assert_eq!(Compression::from_name("php-8.3.26.tar.xz"), Compression::Xz);
        assert_eq!(Compression::from_name("bundle.txz"), Compression::Xz);
    }

    #[test]
    fn test_gzip_suffixes() {
        assert_eq!(Compression::from_name("a.tar.gz"), Compression::Gzip);
        assert_eq!(Compression::from_name("sqlsrv.tgz"), Compression::Gzip);
    }

    #[test]
    fn test_plain_tar_fallback() {
        assert_eq!(Compression::from_name("a.tar"), Compression::None);
        assert_eq!(Compression::from_name("data.bin"), Compression::None);
        assert_eq!(Compression::from_name("noextension"), Compression::None);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert_eq!(Compression::from_name("a.tar.GZ"), Compression::None);
        assert_eq!(Compression::from_name("a.TAR.XZ"), Compression::None);
        assert_eq!(Compression::from_name("a.Tgz"), Compression::None);
    }

    #[test]
    fn test_suffix_must_be_trailing() {
        assert_eq!(Compression::from_name("a.tar.gz.bak"), Compression::None);
        assert_eq!(Compression::from_name("a.tar.xz.part"), Compression::None);
    }

    #[test]
    fn test_from_path_matches_from_name() {
        let path = PathBuf::from("/downloads/php-8.3.26.tar.xz");
        assert_eq!(Compression::from_path(&path), Compression::Xz);
    }

    #[test]
    fn test_open_missing_archive_is_open_error() {
        let err = open_archive(Path::new("/nonexistent/a.tar.gz")).err().unwrap();
        assert!(matches!(err, StripTarError::ArchiveOpen { .. }));
    }
}
