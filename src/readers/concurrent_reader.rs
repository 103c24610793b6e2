use crate::error::Result;
use crate::models::FireDataset;
use crate::readers::FireReader;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::debug;

/// Loads several FIRMS exports at once on the blocking pool.
pub struct ConcurrentReader {
    reader: FireReader,
}

impl ConcurrentReader {
    pub fn new(reader: FireReader) -> Self {
        Self { reader }
    }

    /// Load two windows concurrently, returned in argument order
    pub async fn load_pair(
        &self,
        first: &Path,
        second: &Path,
        limit: usize,
    ) -> Result<(FireDataset, FireDataset)> {
        let first_handle = self.spawn_load(first.to_path_buf(), limit);
        let second_handle = self.spawn_load(second.to_path_buf(), limit);

        let (first, second) = tokio::try_join!(first_handle, second_handle)?;
        Ok((first?, second?))
    }

    /// Load any number of files concurrently, preserving input order
    pub async fn load_all(&self, paths: &[PathBuf], limit: usize) -> Result<Vec<FireDataset>> {
        let handles: Vec<JoinHandle<Result<FireDataset>>> = paths
            .iter()
            .map(|path| self.spawn_load(path.clone(), limit))
            .collect();

        let mut datasets = Vec::with_capacity(handles.len());
        for handle in handles {
            datasets.push(handle.await??);
        }

        Ok(datasets)
    }

    fn spawn_load(&self, path: PathBuf, limit: usize) -> JoinHandle<Result<FireDataset>> {
        let reader = self.reader.clone();
        tokio::task::spawn_blocking(move || {
            debug!(file = %path.display(), "Loading on blocking pool");
            reader.load(&path, limit)
        })
    }
}

impl Default for ConcurrentReader {
    fn default() -> Self {
        Self::new(FireReader::new())
    }
}
