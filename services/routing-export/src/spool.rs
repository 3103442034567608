//! Per-request spool files.
//!
//! The uploaded workbook and the generated result live on disk only for
//! the lifetime of their request. The guard owns both paths and removes
//! them on every exit path, success and failure alike.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use fabrica_utils::RoutingResult;

/// Owns the on-disk artifacts of one export request.
#[derive(Debug)]
pub struct RequestSpool {
    pub upload_path: PathBuf,
    pub result_path: PathBuf,
}

impl RequestSpool {
    /// Reserve uniquely-named paths under the spool directory, creating
    /// the directory if needed.
    pub fn create(spool_dir: impl AsRef<Path>) -> RoutingResult<Self> {
        let dir = spool_dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let id = Uuid::new_v4();
        Ok(Self {
            upload_path: dir.join(format!("upload_{id}.xlsx")),
            result_path: dir.join(format!("result_{id}.xlsx")),
        })
    }
}

impl Drop for RequestSpool {
    fn drop(&mut self) {
        for path in [&self.upload_path, &self.result_path] {
            if let Err(err) = std::fs::remove_file(path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to remove spool file"
                    );
                }
            }
        }
    }
}
