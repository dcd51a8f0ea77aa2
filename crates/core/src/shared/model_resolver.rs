use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("could not determine a cache directory for the detection model")]
    NoCacheDir,
    #[error("failed to create cache directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve a model file by name, downloading it into the user cache on
/// first use.
///
/// Resolution order:
/// 1. User cache directory (platform-specific)
/// 2. Download from `url` into the cache
pub fn resolve(name: &str, url: &str) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached = cache_dir.join(name);
    if cached.exists() {
        return Ok(cached);
    }

    fs::create_dir_all(&cache_dir).map_err(|e| ModelResolveError::CacheDir {
        path: cache_dir.clone(),
        source: e,
    })?;

    log::info!("downloading detection model {name} from {url}");
    download(url, &cached)?;
    Ok(cached)
}

/// Platform-specific model cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/FaceBox/models/` or `~/.cache/FaceBox/models/`
/// - macOS: `~/Library/Caches/FaceBox/models/`
/// - Windows: `%LOCALAPPDATA%/FaceBox/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("FaceBox").join("models"))
        .ok_or(ModelResolveError::NoCacheDir)
}

fn download(url: &str, dest: &Path) -> Result<(), ModelResolveError> {
    let as_download_error = |e: reqwest::Error| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    };

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(as_download_error)?;
    let bytes = response.bytes().map_err(as_download_error)?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = dest.with_extension("part");
    fs::write(&temp_path, &bytes).map_err(|e| ModelResolveError::Write {
        path: temp_path.clone(),
        source: e,
    })?;
    fs::rename(&temp_path, dest).map_err(|e| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_model_cache_dir_returns_path() {
        let dir = model_cache_dir();
        assert!(dir.is_ok());
        let path = dir.unwrap();
        assert!(path.to_string_lossy().contains("FaceBox"));
        assert!(path.to_string_lossy().contains("models"));
    }

    #[test]
    fn test_download_invalid_url_returns_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let result = download("http://invalid.nonexistent.example.com/model", &dest);
        assert!(result.is_err());
    }

    #[test]
    fn test_download_atomic_no_partial_on_failure() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let _ = download("http://invalid.nonexistent.example.com/model", &dest);
        // Neither the dest nor the .part file should exist after failure
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }
}
