use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

use crate::error::NormalizeError;

/// Read a whole file as UTF-8 text
///
/// A missing file is reported as [`NormalizeError::FileNotFound`] so callers can
/// tell it apart from permission or disk failures.
pub async fn read_text(path: &Path) -> Result<String, NormalizeError> {
    debug!("Reading {}", path.display());

    // WHY: early validation gives the missing-file case its own error before any read
    match tokio::fs::try_exists(path).await {
        Ok(true) => {}
        Ok(false) => {
            warn!("Input file does not exist: {}", path.display());
            return Err(NormalizeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(NormalizeError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            NormalizeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NormalizeError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|source| NormalizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Create or truncate `path` and write `content` to it
///
/// A failed write can leave the destination truncated.
pub async fn write_text(path: &Path, content: &str) -> Result<(), NormalizeError> {
    let to_write_error = |source| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).await.map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .await
        .map_err(to_write_error)?;
    writer.flush().await.map_err(to_write_error)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
