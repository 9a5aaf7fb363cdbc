//! The batch OCR runner.

use std::path::PathBuf;

use ocrscan_core::ocr::{OcrProvider, OcrRequest};

use crate::TRACING_TARGET_RUNNER;
use crate::clock::{Clock, SystemClock};
use crate::config::BatchConfig;
use crate::error::{BatchError, ProcessError, Result};
use crate::record::{OcrRecord, RecordSet};
use crate::report;
use crate::scan::{self, InputImage};

/// Outcome counts of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Image files found in the input directory.
    pub discovered: usize,
    /// Files written to the report.
    pub succeeded: usize,
    /// Files skipped because reading or OCR failed.
    pub failed: usize,
    /// Where the report was written.
    pub output_path: PathBuf,
}

/// Sequential batch OCR runner.
///
/// Processes one image at a time: read, send, await, record. Per-file
/// failures are logged and skipped; only directory and report I/O failures
/// abort the run.
#[derive(Debug)]
pub struct BatchRunner<P, C = SystemClock> {
    config: BatchConfig,
    provider: P,
    clock: C,
}

impl<P> BatchRunner<P>
where
    P: OcrProvider,
{
    /// Creates a runner measuring OCR calls with the system clock.
    pub fn new(config: BatchConfig, provider: P) -> Self {
        Self {
            config,
            provider,
            clock: SystemClock,
        }
    }
}

impl<P, C> BatchRunner<P, C>
where
    P: OcrProvider,
    C: Clock,
{
    /// Replaces the clock used to time OCR calls.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> BatchRunner<P, C2> {
        BatchRunner {
            config: self.config,
            provider: self.provider,
            clock,
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Returns the OCR provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the batch and writes the report.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the output directory cannot be
    /// created, the input directory cannot be listed, or the report cannot be
    /// written. Records collected before a failed write are lost.
    pub async fn run(&self) -> Result<BatchSummary> {
        self.config.validate()?;
        self.prepare_output_dir().await?;

        let images = scan::scan_images(&self.config.input_dir)
            .await
            .map_err(|source| BatchError::ReadInputDir {
                path: self.config.input_dir.clone(),
                source,
            })?;

        tracing::info!(
            target: TRACING_TARGET_RUNNER,
            input_dir = %self.config.input_dir.display(),
            images = images.len(),
            provider = self.provider.provider_name(),
            "starting batch"
        );

        let records = self.process_images(&images).await;
        let failed = images.len() - records.len();

        report::write_csv(&self.config.output_path, &records).await?;

        let summary = BatchSummary {
            discovered: images.len(),
            succeeded: records.len(),
            failed,
            output_path: self.config.output_path.clone(),
        };

        tracing::info!(
            target: TRACING_TARGET_RUNNER,
            discovered = summary.discovered,
            succeeded = summary.succeeded,
            failed = summary.failed,
            output_path = %summary.output_path.display(),
            "batch completed"
        );

        Ok(summary)
    }

    /// Processes every image in order, collecting the successful ones.
    ///
    /// A failed image is logged and left out; later images are still processed.
    pub async fn process_images(&self, images: &[InputImage]) -> RecordSet {
        let mut records = RecordSet::new();

        for image in images {
            tracing::info!(
                target: TRACING_TARGET_RUNNER,
                file = %image.file_name,
                "processing image"
            );

            match self.process_image(image).await {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::error!(
                        target: TRACING_TARGET_RUNNER,
                        file = %image.file_name,
                        kind = err.label(),
                        retryable = err.is_retryable(),
                        error = %err,
                        "failed to process image"
                    );
                }
            }
        }

        records
    }

    /// Reads one image, sends it to the provider and builds its record.
    pub async fn process_image(
        &self,
        image: &InputImage,
    ) -> std::result::Result<OcrRecord, ProcessError> {
        let bytes = image.read().await.map_err(ProcessError::Read)?;
        let request = OcrRequest::new(bytes, image.format.mime_type())
            .with_instruction(self.config.instruction.as_str());

        let started = self.clock.now();
        let response = self.provider.process_ocr(request).await?;
        let elapsed = self.clock.elapsed_since(started);

        if !response.has_text() {
            tracing::warn!(
                target: TRACING_TARGET_RUNNER,
                file = %image.file_name,
                "provider returned no text, recording an empty result"
            );
        }

        let record = OcrRecord::new(image.file_name.as_str(), elapsed, response.trimmed_text());

        tracing::debug!(
            target: TRACING_TARGET_RUNNER,
            file = %record.file,
            time_s = record.time_s,
            text_len = record.full_text.len(),
            "image processed"
        );

        Ok(record)
    }

    async fn prepare_output_dir(&self) -> Result<()> {
        let Some(dir) = self.config.output_dir() else {
            return Ok(());
        };

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| BatchError::CreateOutputDir {
                path: dir.to_path_buf(),
                source,
            })
    }
}
