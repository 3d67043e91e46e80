//! Logo export

use crate::domain::Suggestion;

/// Save-file request for a selected logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// Suggested file name, the brand name as-is
    pub file_name: String,
}

impl DownloadRequest {
    pub fn for_logo(logo: &Suggestion) -> Self {
        Self {
            url: logo.icon.clone(),
            file_name: logo.name.clone(),
        }
    }

    /// File name safe for a local filesystem, with an extension taken from the URL
    pub fn local_file_name(&self) -> String {
        let stem: String = self
            .file_name
            .chars()
            .map(|c| if c.is_alphanumeric() || "-_. ".contains(c) { c } else { '_' })
            .collect();
        let stem = stem.trim().trim_matches('.');
        let stem = if stem.is_empty() { "logo" } else { stem };
        format!("{}.{}", stem, self.extension())
    }

    fn extension(&self) -> &str {
        let path = self.url.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/')
            .next()
            .and_then(|segment| segment.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or("png")
    }
}

#[cfg(feature = "native")]
pub use native::save_to_dir;

#[cfg(feature = "native")]
mod native {
    use std::path::{Path, PathBuf};

    use super::DownloadRequest;
    use crate::error::Result;
    use crate::lookup::LookupError;

    /// Fetch the logo and write it into `dir`
    pub async fn save_to_dir(
        client: &reqwest::Client,
        request: &DownloadRequest,
        dir: &Path,
    ) -> Result<PathBuf> {
        let response = client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(request.local_file_name());
        tokio::fs::write(&path, &bytes).await?;
        tracing::info!("Saved {} ({} bytes) to {}", request.url, bytes.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, url: &str) -> DownloadRequest {
        DownloadRequest {
            url: url.to_string(),
            file_name: name.to_string(),
        }
    }

    #[test]
    fn test_local_file_name_keeps_extension() {
        let req = request("Nike, Inc.", "https://cdn.test/nike/icon.jpeg?c=1");
        assert_eq!(req.local_file_name(), "Nike_ Inc.jpeg");
    }

    #[test]
    fn test_local_file_name_defaults() {
        assert_eq!(request("", "https://cdn.test/id/abc").local_file_name(), "logo.png");
        assert_eq!(request("a/b", "https://cdn.test/x.svg").local_file_name(), "a_b.svg");
    }
}
