//! Package access and schema detection
//!
//! An XMind file is a zip container. Which of the two competing internal
//! schemas is present is decided from entry names alone, never by probing
//! entry contents: `content.json` (XMind Zen/2020) wins over `content.xml`
//! (XMind 8) when both exist.

use crate::error::ConvertError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// The two recognized package schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Modern attribute-tree encoding (`content.json`)
    AttributeTree,
    /// Legacy namespaced element-tree encoding (`content.xml`)
    ElementTree,
}

impl Schema {
    /// Well-known zip entry name carrying this schema's document.
    pub fn entry_name(self) -> &'static str {
        match self {
            Schema::AttributeTree => "content.json",
            Schema::ElementTree => "content.xml",
        }
    }
}

/// An opened XMind package.
///
/// Holds the zip handle for the lifetime of detection + entry read only;
/// dropping the package releases the archive on every exit path.
pub struct Package {
    archive: ZipArchive<File>,
}

impl Package {
    /// Open a package from disk.
    ///
    /// A missing path is [`ConvertError::NotFound`]; an unreadable or
    /// non-zip file is [`ConvertError::Archive`].
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::NotFound(path.display().to_string()));
        }
        let file = File::open(path).map_err(|e| ConvertError::Archive(e.to_string()))?;
        let archive = ZipArchive::new(file).map_err(|e| ConvertError::Archive(e.to_string()))?;
        Ok(Package { archive })
    }

    /// Select the parsing pipeline from entry names, in priority order.
    pub fn detect_schema(&self) -> Result<Schema, ConvertError> {
        for schema in [Schema::AttributeTree, Schema::ElementTree] {
            if self.contains(schema.entry_name()) {
                return Ok(schema);
            }
        }
        Err(ConvertError::UnsupportedFormat)
    }

    fn contains(&self, entry: &str) -> bool {
        self.archive.file_names().any(|name| name == entry)
    }

    /// Read the named entry as UTF-8 text.
    pub fn read_entry(&mut self, entry: &str) -> Result<String, ConvertError> {
        let mut file = self
            .archive
            .by_name(entry)
            .map_err(|e| ConvertError::Archive(format!("cannot open entry '{entry}': {e}")))?;
        let mut source = String::new();
        file.read_to_string(&mut source)
            .map_err(|e| ConvertError::Archive(format!("cannot read entry '{entry}': {e}")))?;
        Ok(source)
    }
}
