use std::path::{Path, PathBuf};

use bound_core::{gps::HemispherePolicy, model::BoundingRectangle};
use clap::Parser;

use crate::{
    app::FilterConfig,
    error::copy_failures_error,
    filter::{self, FilterOptions, FilterSummary},
    util::fs,
    BoundError,
};

/// Copies the images of a directory whose EXIF geotag falls within a bounding
/// rectangle. The rectangle is given by the latitude and longitude of its
/// top-left (north-west) and bottom-right (south-east) corners, in decimal
/// degrees with south and west negative.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct BoundApp {
    /// directory of images to filter
    pub src_dir: String,

    /// existing directory receiving the matching images
    pub dest_dir: String,

    /// latitude of the top-left corner
    pub lat_top_left: String,

    /// longitude of the top-left corner
    pub lon_top_left: String,

    /// latitude of the bottom-right corner
    pub lat_bottom_right: String,

    /// longitude of the bottom-right corner
    pub lon_bottom_right: String,

    /// number of images processed at once. defaults to 1.
    #[arg(short, long)]
    pub parallelism: Option<usize>,

    /// report the matching images without copying them
    #[arg(long)]
    pub dry_run: bool,

    /// read hemisphere reference bytes other than N or E as south or west
    /// instead of ignoring the image
    #[arg(long)]
    pub lenient_hemisphere: bool,

    /// TOML file with default values for parallelism, dry_run and
    /// hemisphere_policy
    #[arg(short, long)]
    pub configuration_file: Option<String>,

    /// write a JSON summary of the run to this file
    #[arg(short, long)]
    pub summary_file: Option<String>,
}

/// validated inputs of a filter run
#[derive(Debug, Clone)]
pub struct FilterRun {
    pub src_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub rect: BoundingRectangle,
    pub options: FilterOptions,
}

impl BoundApp {
    /// checks every argument before any image is touched. directories are
    /// checked first, then coordinates, then the rectangle, then options.
    pub fn validate(&self) -> Result<FilterRun, BoundError> {
        let src_dir = fs::validate_directory(&self.src_dir, "source")?;
        let dest_dir = fs::validate_directory(&self.dest_dir, "destination")?;
        if fs::same_directory(&src_dir, &dest_dir)? {
            return Err(BoundError::InvalidUserInput(format!(
                "source and destination both resolve to '{}'",
                src_dir.display()
            )));
        }

        let rect = BoundingRectangle::new(
            parse_coordinate("lat_top_left", &self.lat_top_left)?,
            parse_coordinate("lon_top_left", &self.lon_top_left)?,
            parse_coordinate("lat_bottom_right", &self.lat_bottom_right)?,
            parse_coordinate("lon_bottom_right", &self.lon_bottom_right)?,
        )?;

        let options = self.options()?;
        options.validate()?;

        Ok(FilterRun {
            src_dir,
            dest_dir,
            rect,
            options,
        })
    }

    /// merges command line flags over the configuration file, if any
    pub fn options(&self) -> Result<FilterOptions, BoundError> {
        let config = match &self.configuration_file {
            Some(filename) => FilterConfig::from_file(Path::new(filename))?,
            None => FilterConfig::default(),
        };
        let mut options = config.options();
        if let Some(parallelism) = self.parallelism {
            options.parallelism = parallelism;
        }
        if self.dry_run {
            options.dry_run = true;
        }
        if self.lenient_hemisphere {
            options.hemisphere_policy = HemispherePolicy::Lenient;
        }
        options.progress_bar = true;
        Ok(options)
    }

    /// validates the arguments and runs the filter. copy failures are
    /// reported as an error once every file has been processed.
    pub fn run(&self) -> Result<FilterSummary, BoundError> {
        let FilterRun {
            src_dir,
            dest_dir,
            rect,
            options,
        } = self.validate()?;
        let summary = filter::run(&src_dir, &dest_dir, &rect, &options)?;
        if let Some(summary_file) = &self.summary_file {
            fs::write_json(&summary, Path::new(summary_file))?;
        }
        if !summary.failed.is_empty() {
            return Err(copy_failures_error(&summary.failed));
        }
        Ok(summary)
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64, BoundError> {
    value.parse::<f64>().map_err(|e| {
        BoundError::InvalidUserInput(format!(
            "invalid floating point parameter {name} '{value}': {e}"
        ))
    })
}
