//! Batch Use Case implementation

use std::path::Path;

use crate::application::convert::{IconConverter, RenderFailure};
use crate::application::events::SyncEvent;
use crate::domain::ports::{FileSystem, Rasterizer};
use crate::domain::services::VECTOR_EXTENSION;
use crate::error::{RasterpackError, RasterpackResult};

use super::options::BatchOptions;
use super::result::BatchReport;

/// Batch Use Case
///
/// Clearing -> Scanning -> Converting -> Done. Render failures are
/// recorded in the report; only root-level filesystem errors abort.
pub struct BatchUseCase<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    converter: IconConverter<R, FS>,
}

impl<R, FS> BatchUseCase<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    pub fn new(converter: IconConverter<R, FS>) -> Self {
        Self { converter }
    }

    pub fn execute<F>(&self, options: &BatchOptions, on_event: F) -> RasterpackResult<BatchReport>
    where
        F: Fn(SyncEvent),
    {
        let mapper = self.converter.mapper();
        let fs = self.converter.fs();
        let input = mapper.input_root();
        let output = mapper.output_root();

        if mapper.input_within_output() {
            return Err(RasterpackError::OutputContainsInput {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
            });
        }
        // Check before clearing so a typo in --input doesn't wipe the outputs
        if !fs.is_dir(input) {
            return Err(RasterpackError::filesystem(
                input,
                "input directory does not exist",
            ));
        }

        on_event(SyncEvent::BatchStarted {
            input: input.display().to_string(),
            output: output.display().to_string(),
        });

        if !options.dry_run {
            fs.clear_dir(output)
                .map_err(|e| RasterpackError::filesystem(output, e))?;
            on_event(SyncEvent::OutputCleared {
                output: output.display().to_string(),
            });
        }

        let mut sources = fs
            .list_files(input, VECTOR_EXTENSION)
            .map_err(|e| RasterpackError::filesystem(input, e))?;
        sources.retain(|source| mapper.is_source(source));
        on_event(SyncEvent::ScanComplete {
            files: sources.len(),
        });

        let mut report = BatchReport::new();
        report.files = sources.len();

        for source in &sources {
            if options.dry_run {
                self.plan(source, &mut report, &on_event);
            } else {
                self.convert(source, &mut report, &on_event);
            }
        }

        on_event(SyncEvent::BatchComplete {
            files: report.files,
            generated: report.generated.len(),
            failed: report.failures.len(),
        });

        Ok(report)
    }

    fn convert(&self, source: &Path, report: &mut BatchReport, on_event: &impl Fn(SyncEvent)) {
        on_event(SyncEvent::Converting {
            source: source.display().to_string(),
        });

        match self.converter.convert(source) {
            Ok(converted) => {
                converted.emit(on_event);
                report.absorb(converted);
            }
            Err(e) => {
                on_event(SyncEvent::Error {
                    message: e.to_string(),
                });
                report.add_failure(RenderFailure {
                    source: source.to_path_buf(),
                    output: Default::default(),
                    density: "",
                    message: e.to_string(),
                });
            }
        }
    }

    fn plan(&self, source: &Path, report: &mut BatchReport, on_event: &impl Fn(SyncEvent)) {
        match self.converter.mapper().all_output_paths(source) {
            Ok(outputs) => {
                on_event(SyncEvent::Planned {
                    source: source.display().to_string(),
                    outputs: outputs.iter().map(|p| p.display().to_string()).collect(),
                });
                report.planned.extend(outputs);
            }
            Err(e) => on_event(SyncEvent::Error {
                message: e.to_string(),
            }),
        }
    }
}
