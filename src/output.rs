use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub trait PageSink {
    /// Écrit la page complète ; rien n'est écrit en cas d'échec.
    fn write_page(&self, page: &str) -> anyhow::Result<()>;
}

/// Fichier de sortie, remplacé de manière atomique.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSink for FileSink {
    fn write_page(&self, page: &str) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(page.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("atomic rename to {}", self.path.display()))?;
        info!(path = %self.path.display(), bytes = page.len(), "calendar page written");
        Ok(())
    }
}

/// Sortie standard.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl PageSink for StdoutSink {
    fn write_page(&self, page: &str) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(page.as_bytes()).context("writing to stdout")?;
        lock.flush()?;
        Ok(())
    }
}
