// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

/// テストごとの一時ディレクトリ (Drop で削除)
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let inner = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.inner.path().join(rel)
    }

    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_file(&self, rel: &str) -> Vec<u8> {
        fs::read(self.join(rel)).unwrap()
    }
}
