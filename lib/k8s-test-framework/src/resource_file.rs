//! Temporary files holding serialized Kubernetes manifests.

use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

use super::Result;

/// Keeps a manifest on disk for as long as the fixture created from it may
/// still need a `kubectl ... -f` invocation, teardown included.
#[derive(Debug)]
pub struct ResourceFile {
    file: NamedTempFile,
}

impl ResourceFile {
    pub fn new(data: &str) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(data.as_bytes())?;
        file.as_file().sync_all()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
