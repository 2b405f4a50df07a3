use serde::{Deserialize, Serialize};

/// what happened to one regular file of the source directory
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Copied,
    /// in bounds during a dry run
    WouldCopy,
    OutOfBounds,
    /// no usable geotag, with the reason
    NoGps(String),
    /// in bounds but the copy failed
    CopyFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFailure {
    pub file_name: String,
    pub reason: String,
}

/// report of a filter run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// regular files evaluated
    pub considered: usize,
    /// files copied, or that would have been copied during a dry run
    pub copied: Vec<String>,
    pub out_of_bounds: usize,
    pub no_gps: usize,
    pub failed: Vec<CopyFailure>,
    pub dry_run: bool,
}

impl FilterSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn add(&mut self, file_name: String, outcome: FileOutcome) {
        self.considered += 1;
        match outcome {
            FileOutcome::Copied | FileOutcome::WouldCopy => self.copied.push(file_name),
            FileOutcome::OutOfBounds => self.out_of_bounds += 1,
            FileOutcome::NoGps(_) => self.no_gps += 1,
            FileOutcome::CopyFailed(reason) => self.failed.push(CopyFailure { file_name, reason }),
        }
    }

    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// files that passed the bounds test, whether or not their copy succeeded
    pub fn matched_count(&self) -> usize {
        self.copied.len() + self.failed.len()
    }
}

impl std::fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.dry_run { "would copy" } else { "copied" };
        write!(
            f,
            "considered {} file(s): {verb} {}, {} out of bounds, {} without GPS data, {} failed",
            self.considered,
            self.copied.len(),
            self.out_of_bounds,
            self.no_gps,
            self.failed.len()
        )
    }
}
