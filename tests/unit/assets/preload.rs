use super::*;

struct FailEvery {
    fail_all: bool,
    seen: Vec<String>,
}

impl AssetLoader for FailEvery {
    fn load(&mut self, path: &str) -> CalendarResult<()> {
        self.seen.push(path.to_string());
        if self.fail_all || path.contains("day3") {
            Err(CalendarError::storage("404"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn manifest_lists_thumbnails_then_background() {
    let m = AssetManifest::for_calendar();
    assert_eq!(m.len(), 13);
    assert_eq!(m.paths()[0], "thumbnails/day1.jpg");
    assert_eq!(m.paths()[12], BACKGROUND_IMAGE);
}

#[test]
fn failures_are_skipped_and_progress_completes() {
    let mut loader = FailEvery {
        fail_all: false,
        seen: Vec::new(),
    };
    let mut steps = Vec::new();
    let report = preload(&mut loader, &AssetManifest::for_calendar(), |p| steps.push(p));
    assert_eq!(report.loaded, 12);
    assert_eq!(report.failed, vec!["thumbnails/day3.jpg".to_string()]);
    assert!(report.is_complete());
    assert_eq!(steps.len(), 13);
    assert!(steps.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*steps.last().unwrap(), 1.0);
    assert_eq!(loader.seen.len(), 13);
}

#[test]
fn total_failure_still_reaches_full_progress() {
    let mut loader = FailEvery {
        fail_all: true,
        seen: Vec::new(),
    };
    let report = preload(&mut loader, &AssetManifest::for_calendar(), |_| {});
    assert_eq!(report.loaded, 0);
    assert_eq!(report.failed.len(), 13);
    assert_eq!(report.progress, 1.0);
}

#[test]
fn empty_manifest_is_complete() {
    let mut loader = FailEvery {
        fail_all: true,
        seen: Vec::new(),
    };
    let report = preload(&mut loader, &AssetManifest::from_paths(Vec::new()), |_| {});
    assert!(report.is_complete());
}

#[test]
fn fs_loader_reports_missing_files() {
    let dir = std::env::temp_dir().join(format!("advent_preload_{}", std::process::id()));
    std::fs::create_dir_all(dir.join("thumbnails")).unwrap();
    std::fs::write(dir.join("thumbnails/day1.jpg"), b"jpg").unwrap();
    let mut loader = FsAssetLoader::new(&dir);
    assert!(loader.load("thumbnails/day1.jpg").is_ok());
    assert!(loader.load("thumbnails\\day1.jpg").is_ok());
    assert!(loader.load("thumbnails/day2.jpg").is_err());
    assert!(loader.load("../etc/passwd").is_err());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn normalize_rejects_escapes() {
    assert_eq!(normalize_rel_path("./a//b.jpg").unwrap(), "a/b.jpg");
    assert!(normalize_rel_path("/abs.jpg").is_err());
    assert!(normalize_rel_path("a/../b").is_err());
    assert!(normalize_rel_path("").is_err());
}
