//! Product file download to local disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::client::Http;
use crate::error::{ApiError, Result};

#[async_trait]
pub trait ProductFileRepo: Send + Sync {
    /// Downloads the product's file into the downloads directory and
    /// returns the written path.
    async fn download(&self, product_id: i64) -> Result<PathBuf>;
}

pub struct HttpProductFileRepo {
    http: Http,
    downloads_dir: PathBuf,
}

impl HttpProductFileRepo {
    pub fn new(http: Http, downloads_dir: PathBuf) -> Self {
        Self {
            http,
            downloads_dir,
        }
    }
}

#[async_trait]
impl ProductFileRepo for HttpProductFileRepo {
    async fn download(&self, product_id: i64) -> Result<PathBuf> {
        let (bytes, disposition) = self
            .http
            .get_bytes(&format!("apimovil/productos/{product_id}/descargar/"))
            .await?;

        let fallback = format!("producto_{product_id}.bin");
        let filename = filename_from_disposition(disposition.as_deref(), &fallback);

        fs::create_dir_all(&self.downloads_dir)
            .await
            .map_err(write_error)?;

        let path = self.downloads_dir.join(sanitize(&filename));
        fs::write(&path, &bytes).await.map_err(write_error)?;

        info!(path = %path.display(), size = bytes.len(), "downloaded product file");
        Ok(path)
    }
}

fn write_error(error: std::io::Error) -> ApiError {
    ApiError::rejected(format!("No se pudo guardar el archivo: {error}"))
}

/// Extracts the filename from a `Content-Disposition` header, e.g.
/// `attachment; filename="algebra.pdf"`. Falls back when the header is
/// missing, has no filename, or the filename is blank.
pub fn filename_from_disposition(disposition: Option<&str>, fallback: &str) -> String {
    let Some(disposition) = disposition else {
        return fallback.to_string();
    };
    let Some(idx) = disposition.find("filename=") else {
        return fallback.to_string();
    };

    let mut name = disposition[idx + "filename=".len()..].trim();
    // Attribute may be followed by further parameters.
    if let Some(end) = name.find(';') {
        name = name[..end].trim();
    }
    let name = name.trim_matches('"').trim();

    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Keeps only the final path component of a server-supplied name.
fn sanitize(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("descarga.bin")
        .to_string()
}
