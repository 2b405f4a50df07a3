use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use bound_core::{
    gps::{GpsExtractor, KamadakDecoder, TagDecoder},
    model::{in_bounds, BoundingRectangle},
};
use kdam::{Bar, BarBuilder, BarExt};
use rayon::prelude::*;

use super::{FileOutcome, FilterOptions, FilterSummary};
use crate::{util::fs, BoundError};

/// a regular file found in the source directory
#[derive(Debug, Clone)]
struct SourceFile {
    path: PathBuf,
    file_name: OsString,
}

impl SourceFile {
    fn display_name(&self) -> String {
        self.file_name.to_string_lossy().to_string()
    }
}

/// copies every regular file of `src_dir` whose geotag lies within `rect` into
/// `dest_dir`, keeping its file name. files without a usable geotag are
/// skipped. a copy failure is recorded in the summary and does not stop the run.
///
/// # Arguments
///
/// * `src_dir` - directory of images to filter
/// * `dest_dir` - directory receiving the matching images
/// * `rect` - region the geotag must fall in, edges included
/// * `options` - run settings
///
/// # Returns
///
/// * a summary of the outcome of every file considered
pub fn run(
    src_dir: &Path,
    dest_dir: &Path,
    rect: &BoundingRectangle,
    options: &FilterOptions,
) -> Result<FilterSummary, BoundError> {
    let extractor = GpsExtractor::new(KamadakDecoder, options.hemisphere_policy);
    run_with_extractor(src_dir, dest_dir, rect, options, &extractor)
}

/// [`run`] with a caller-provided extractor
pub fn run_with_extractor<D>(
    src_dir: &Path,
    dest_dir: &Path,
    rect: &BoundingRectangle,
    options: &FilterOptions,
    extractor: &GpsExtractor<D>,
) -> Result<FilterSummary, BoundError>
where
    D: TagDecoder + Sync,
{
    options.validate()?;
    log::info!(
        "filtering '{}' into '{}' with bounds {rect}, {:?} hemisphere policy",
        src_dir.display(),
        dest_dir.display(),
        extractor.policy()
    );

    let files = list_regular_files(src_dir)?;
    let bar: Option<Arc<Mutex<Bar>>> = if options.progress_bar {
        let bar = BarBuilder::default()
            .desc("filter images")
            .total(files.len())
            .animation("fillup")
            .build()
            .map_err(|e| BoundError::InternalError(format!("failure building progress bar: {e}")))?;
        Some(Arc::new(Mutex::new(bar)))
    } else {
        None
    };

    let process = |file: &SourceFile| {
        let outcome = process_file(file, dest_dir, rect, options, extractor);
        if let Some(bar) = bar.as_ref() {
            if let Ok(mut bar) = bar.lock() {
                let _ = bar.update(1);
            }
        }
        (file.display_name(), outcome)
    };

    let outcomes: Vec<(String, FileOutcome)> = if options.parallelism > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.parallelism)
            .build()
            .map_err(|e| {
                BoundError::InternalError(format!("failure building thread pool: {e}"))
            })?;
        pool.install(|| files.par_iter().map(process).collect())
    } else {
        files.iter().map(process).collect()
    };
    if bar.is_some() {
        eprintln!(); // end progress bar
    }

    let mut summary = FilterSummary::new(options.dry_run);
    for (file_name, outcome) in outcomes {
        summary.add(file_name, outcome);
    }
    log::info!("{summary}");
    Ok(summary)
}

/// evaluates one file and copies it when in bounds
fn process_file<D: TagDecoder>(
    file: &SourceFile,
    dest_dir: &Path,
    rect: &BoundingRectangle,
    options: &FilterOptions,
    extractor: &GpsExtractor<D>,
) -> FileOutcome {
    let coord = match extractor.extract(&file.path) {
        Ok(coord) => coord,
        Err(reason) => {
            log::debug!("{}: no usable geotag, {reason}", file.path.display());
            return FileOutcome::NoGps(reason.to_string());
        }
    };
    if !in_bounds(Some(&coord), rect) {
        log::debug!("{}: {coord} is out of bounds", file.path.display());
        return FileOutcome::OutOfBounds;
    }

    let name = file.display_name();
    if options.dry_run {
        println!("would copy: {name}");
        return FileOutcome::WouldCopy;
    }
    let destination = dest_dir.join(&file.file_name);
    match fs::copy_file(&file.path, &destination) {
        Ok(_) => {
            println!("copied: {name}");
            FileOutcome::Copied
        }
        Err(e) => {
            log::error!("{e}");
            FileOutcome::CopyFailed(e.to_string())
        }
    }
}

/// lists the regular files of a directory, ignoring directories, symlinks
/// and special files. entries come back in the order the filesystem yields.
fn list_regular_files(src_dir: &Path) -> Result<Vec<SourceFile>, BoundError> {
    let read_error = |e: std::io::Error| BoundError::ReadError {
        path: src_dir.to_path_buf(),
        message: format!("unable to list directory: {e}"),
    };
    let mut files = vec![];
    for entry in std::fs::read_dir(src_dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => files.push(SourceFile {
                path: entry.path(),
                file_name: entry.file_name(),
            }),
            Ok(_) => log::debug!("skipping non-regular entry {:?}", entry.file_name()),
            Err(e) => log::warn!("unable to inspect entry {:?}: {e}", entry.file_name()),
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bound_core::gps::test_utils::ExifFixture;

    #[test]
    fn test_list_regular_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"b").unwrap();
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let mut names = list_regular_files(dir.path())
            .unwrap()
            .iter()
            .map(SourceFile::display_name)
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_list_missing_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_regular_files(&dir.path().join("missing"));
        assert!(matches!(result, Err(BoundError::ReadError { .. })));
    }

    #[test]
    fn test_process_file_outcomes() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let rect = BoundingRectangle::new(40.0, -75.0, 39.0, -74.0).unwrap();
        let extractor = GpsExtractor::default();
        let options = FilterOptions::default();

        let inside = src.path().join("inside.jpg");
        ExifFixture::from_decimal(39.5, -74.5)
            .write_jpeg(&inside)
            .unwrap();
        let outside = src.path().join("outside.jpg");
        ExifFixture::from_decimal(39.5, -73.9)
            .write_jpeg(&outside)
            .unwrap();
        let untagged = src.path().join("untagged.jpg");
        ExifFixture::new().write_jpeg(&untagged).unwrap();

        let source = |path: &Path| SourceFile {
            path: path.to_path_buf(),
            file_name: path.file_name().unwrap().to_os_string(),
        };
        let outcome = |path: &Path| {
            process_file(&source(path), dest.path(), &rect, &options, &extractor)
        };

        assert_eq!(outcome(&inside), FileOutcome::Copied);
        assert_eq!(outcome(&outside), FileOutcome::OutOfBounds);
        assert!(matches!(outcome(&untagged), FileOutcome::NoGps(_)));
        assert!(dest.path().join("inside.jpg").is_file());
        assert!(!dest.path().join("outside.jpg").exists());
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let rect = BoundingRectangle::new(1.0, 0.0, 0.0, 1.0).unwrap();
        let options = FilterOptions {
            parallelism: 0,
            ..Default::default()
        };
        let result = run(src.path(), dest.path(), &rect, &options);
        assert!(matches!(result, Err(BoundError::InvalidUserInput(_))));
    }
}
