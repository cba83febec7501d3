use std::path::PathBuf;

use crate::{
    foundation::core::DayNumber,
    foundation::error::{CalendarError, CalendarResult},
};

/// Background image shown behind the doors.
pub const BACKGROUND_IMAGE: &str = "images/background.jpg";

/// Relative path of a door thumbnail.
pub fn thumbnail_path(day: DayNumber) -> String {
    format!("thumbnails/{}.jpg", day.thumbnail_ref())
}

/// Static assets fetched before the calendar is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetManifest {
    paths: Vec<String>,
}

impl AssetManifest {
    /// Twelve door thumbnails followed by the background image.
    pub fn for_calendar() -> Self {
        let mut paths: Vec<String> = DayNumber::all().map(thumbnail_path).collect();
        paths.push(BACKGROUND_IMAGE.to_string());
        Self { paths }
    }

    pub fn from_paths(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Fetches one asset. Implementations only report success or failure.
pub trait AssetLoader {
    fn load(&mut self, path: &str) -> CalendarResult<()>;
}

/// Loads assets from a directory on disk.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&mut self, path: &str) -> CalendarResult<()> {
        let rel = normalize_rel_path(path)?;
        let full = self.root.join(&rel);
        let meta = std::fs::metadata(&full).map_err(|e| {
            CalendarError::storage(format!("asset '{}': {e}", full.display()))
        })?;
        if !meta.is_file() || meta.len() == 0 {
            return Err(CalendarError::storage(format!(
                "asset '{}' is empty or not a file",
                full.display()
            )));
        }
        Ok(())
    }
}

/// Outcome of a preload pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreloadReport {
    pub loaded: usize,
    pub failed: Vec<String>,
    /// Fraction in `[0, 1]`; `1.0` once every asset has been attempted.
    pub progress: f64,
}

impl PreloadReport {
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Attempt every asset in order. Failures are logged and recorded, never fatal.
#[tracing::instrument(skip_all, fields(assets = manifest.len()))]
pub fn preload(
    loader: &mut dyn AssetLoader,
    manifest: &AssetManifest,
    mut on_progress: impl FnMut(f64),
) -> PreloadReport {
    let mut report = PreloadReport::default();
    let total = manifest.len();
    for (idx, path) in manifest.paths().iter().enumerate() {
        match loader.load(path) {
            Ok(()) => report.loaded += 1,
            Err(e) => {
                tracing::warn!(%path, error = %e, "asset failed to load, continuing");
                report.failed.push(path.clone());
            }
        }
        report.progress = (idx + 1) as f64 / total as f64;
        on_progress(report.progress);
    }
    if total == 0 {
        report.progress = 1.0;
        on_progress(1.0);
    }
    report
}

/// Normalize a relative asset path to `/`-separated form without `.` or `..` segments.
pub fn normalize_rel_path(source: &str) -> CalendarResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CalendarError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CalendarError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CalendarError::validation(
            "asset path must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/preload.rs"]
mod tests;
