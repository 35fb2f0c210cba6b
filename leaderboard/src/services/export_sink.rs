//! File-backed export sink
//!
//! Writes ledger exports as pretty JSON, going through a temporary file and a
//! rename so a crashed write never leaves a truncated export behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::LeaderboardResult;
use crate::leaderboard::LedgerExport;
use crate::traits::ExportSink;

/// Real file system export sink
#[derive(Debug, Clone, Default)]
pub struct RealExportSink;

impl RealExportSink {
    pub fn new() -> Self {
        Self
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

#[async_trait]
impl ExportSink for RealExportSink {
    async fn write_export(&self, path: &Path, export: &LedgerExport) -> LeaderboardResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(export)?;
        let temp = Self::temp_path(path);

        let mut file = fs::File::create(&temp).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp, path).await?;
        Ok(())
    }
}
