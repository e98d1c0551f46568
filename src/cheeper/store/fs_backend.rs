use super::backend::StorageBackend;
use super::Collection;
use crate::error::StoreError;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.jsonl", collection.name()))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn scan(
        &self,
        collection: Collection,
        visit: &mut dyn FnMut(Value) -> ControlFlow<()>,
    ) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(());
        }

        let reader = BufReader::new(fs::File::open(&path)?);
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let doc: Value = serde_json::from_str(&line).map_err(|e| {
                StoreError::Backend(format!("{}:{}: {}", path.display(), n + 1, e))
            })?;
            if visit(doc).is_break() {
                break;
            }
        }
        Ok(())
    }

    fn append(&self, collection: Collection, docs: &[Value]) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        self.ensure_dir()?;

        let mut buf = String::new();
        for doc in docs {
            buf.push_str(&serde_json::to_string(doc)?);
            buf.push('\n');
        }

        let path = self.collection_path(collection);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(buf.as_bytes())?;
        debug!(collection = collection.name(), count = docs.len(), "appended");
        Ok(())
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.ensure_dir()?;
        if !self.root.is_dir() {
            return Err(StoreError::Backend(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let probe = self.root.join(format!(".ping-{}.tmp", Uuid::new_v4()));
        fs::write(&probe, b"ping")?;
        fs::remove_file(&probe)?;
        Ok(())
    }
}
