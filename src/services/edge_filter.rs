use crate::error::AppError;
use crate::models::OutputConfig;
use edge_color::{HeaderLayout, SourceImage};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub max_intensity: u32,
    pub layout: HeaderLayout,
    pub bytes_written: usize,
}

/// One input-to-output edge colorization
///
/// The whole output is rendered in memory, staged in a temporary file beside
/// the destination and renamed into place, so a failed run never leaves a
/// partial or truncated file behind.
pub struct EdgeFilterJob {
    input: PathBuf,
    output: PathBuf,
    options: OutputConfig,
}

impl EdgeFilterJob {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: OutputConfig,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options,
        }
    }

    /// Force replacing an existing output, regardless of configuration
    pub fn force_overwrite(mut self, force: bool) -> Self {
        if force {
            self.options.overwrite = true;
        }
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Read, filter and write
    pub fn run(&self) -> Result<FilterReport, AppError> {
        let started = Instant::now();

        if !self.options.overwrite && self.output.exists() {
            return Err(AppError::OutputExists(self.output.clone()));
        }

        let source = self.read_source()?;
        let header = source.header;
        tracing::info!(
            input = %self.input.display(),
            width = header.width,
            height = header.height,
            max_intensity = header.max_intensity,
            layout = ?header.layout,
            "Read source image"
        );

        let colorized = edge_color::colorize(&source.luminance)?;

        let mut rendered = Vec::new();
        edge_color::write_output(&mut rendered, &header, &colorized)?;
        self.write_file(&rendered)?;

        tracing::info!(
            output = %self.output.display(),
            bytes = rendered.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Wrote edge image"
        );

        Ok(FilterReport {
            output: self.output.clone(),
            width: header.width,
            height: header.height,
            max_intensity: header.max_intensity,
            layout: header.layout,
            bytes_written: rendered.len(),
        })
    }

    fn read_source(&self) -> Result<SourceImage, AppError> {
        let file = File::open(&self.input).map_err(|source| AppError::OpenInput {
            path: self.input.clone(),
            source,
        })?;
        Ok(edge_color::read_source(BufReader::new(file))?)
    }

    fn write_file(&self, bytes: &[u8]) -> Result<(), AppError> {
        let write_error = |source: std::io::Error| AppError::WriteOutput {
            path: self.output.clone(),
            source,
        };

        let parent = self
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if self.options.create_parent_dirs {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        // same directory as the target, so persisting is a rename
        let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
        staged.write_all(bytes).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged
            .persist(&self.output)
            .map_err(|e| write_error(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FLAT_3X3: &str = "P3\n3 3\n255\n\
        9 9 9 9 9 9 9 9 9\n\
        9 9 9 9 9 9 9 9 9\n\
        9 9 9 9 9 9 9 9 9\n";

    #[test]
    fn test_force_overwrite_only_enables() {
        let options = OutputConfig {
            overwrite: false,
            create_parent_dirs: false,
        };
        let job =
            EdgeFilterJob::new("in.ppm", "out.ppm", options.clone()).force_overwrite(false);
        assert!(!job.options.overwrite);

        let job = EdgeFilterJob::new("in.ppm", "out.ppm", options).force_overwrite(true);
        assert!(job.options.overwrite);
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.ppm");
        let output = dir.path().join("edges.ppm");
        std::fs::write(&input, FLAT_3X3).unwrap();

        let report = EdgeFilterJob::new(&input, &output, OutputConfig::default())
            .run()
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(report.width, 3);
        assert_eq!(report.height, 3);
        assert_eq!(report.max_intensity, 255);
        assert_eq!(report.layout, HeaderLayout::Compact);
        assert_eq!(report.bytes_written, written.len());
        assert!(written.starts_with("P3\n3 3\n255\n"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let job = EdgeFilterJob::new(
            dir.path().join("missing.ppm"),
            dir.path().join("out.ppm"),
            OutputConfig::default(),
        );

        let err = job.run().unwrap_err();
        assert!(matches!(err, AppError::OpenInput { .. }));
        assert!(!job.output().exists());
    }

    #[test]
    fn test_create_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.ppm");
        let output = dir.path().join("nested/deeper/edges.ppm");
        std::fs::write(&input, FLAT_3X3).unwrap();

        let options = OutputConfig {
            overwrite: true,
            create_parent_dirs: true,
        };
        EdgeFilterJob::new(&input, &output, options).run().unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_missing_parent_dir_without_create() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.ppm");
        let output = dir.path().join("nested/edges.ppm");
        std::fs::write(&input, FLAT_3X3).unwrap();

        let err = EdgeFilterJob::new(&input, &output, OutputConfig::default())
            .run()
            .unwrap_err();

        assert!(matches!(err, AppError::WriteOutput { .. }));
    }

    #[test]
    fn test_failed_write_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.ppm");
        std::fs::write(&input, FLAT_3X3).unwrap();
        // a non-empty directory cannot be replaced by a file
        let output = dir.path().join("taken");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep"), "x").unwrap();

        let err = EdgeFilterJob::new(&input, &output, OutputConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, AppError::WriteOutput { .. }));

        let mut names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["flat.ppm", "taken"]);
        assert!(output.join("keep").exists());
    }
}
