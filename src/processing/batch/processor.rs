use tracing::{debug, info, warn};

use crate::core::{BatchSummary, TintConfig, TintTask};
use crate::utils::{ensure_dir, scan_input_dir, TintError, TintResult};
use crate::worker::WorkerPool;

/// Represents the progress of a batch tint operation
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub total_files: usize,
    pub processed_files: usize,
    pub failed_tasks: Vec<(String, String)>, // (file_path, error_message)
}

/// Drives a full batch: scan the input directory, dispatch tasks to the
/// worker pool, collect per-file results.
pub struct BatchProcessor {
    pool: WorkerPool,
}

impl BatchProcessor {
    pub fn new(pool: WorkerPool) -> Self {
        Self { pool }
    }

    /// Build the task list for the configured input directory.
    ///
    /// Fatal when the input directory is missing; stray entries inside it
    /// are skipped silently and never abort a run.
    pub fn scan_tasks(config: &TintConfig) -> TintResult<Vec<TintTask>> {
        let input_dir = config.input_dir.as_path();
        if !input_dir.is_dir() {
            return Err(TintError::config(format!(
                "input directory does not exist: {}",
                input_dir.display()
            )));
        }

        let files = scan_input_dir(input_dir)?;
        let mut tasks = Vec::with_capacity(files.len());
        for file in files {
            match TintTask::for_file(&file, &config.output_dir, &config.settings) {
                Some(task) => tasks.push(task),
                None => debug!("skipping {}: unsupported file name", file.display()),
            }
        }
        Ok(tasks)
    }

    /// Run one batch end to end.
    ///
    /// The output directory is only created after the input directory has
    /// been validated, so a misconfigured run leaves no trace on disk.
    pub async fn run(
        &self,
        config: &TintConfig,
        progress_callback: impl Fn(BatchProgress) + Send + 'static,
    ) -> TintResult<BatchSummary> {
        let tasks = Self::scan_tasks(config)?;
        info!(
            "selected {} files in {}",
            tasks.len(),
            config.input_dir.display()
        );

        ensure_dir(&config.output_dir)?;
        Ok(self.process_batch(tasks, progress_callback).await)
    }

    /// Process tasks on the worker pool with per-file failure isolation.
    ///
    /// A failure processing one file is folded into the summary and never
    /// aborts the rest of the batch.
    pub async fn process_batch(
        &self,
        tasks: Vec<TintTask>,
        progress_callback: impl Fn(BatchProgress) + Send + 'static,
    ) -> BatchSummary {
        let total_files = tasks.len();

        let mut handles = Vec::with_capacity(total_files);
        for task in tasks {
            let pool = self.pool.clone();
            handles.push(tokio::spawn(async move { pool.process(task).await }));
        }

        let mut summary = BatchSummary::new(total_files);
        let mut processed_files = 0;
        for handle in handles {
            let record = match handle.await {
                Ok(record) => record,
                Err(e) => {
                    warn!("worker task aborted: {e}");
                    continue;
                }
            };
            processed_files += 1;

            if record.success {
                info!(
                    "tinted {} -> {}",
                    record.input_path.display(),
                    record.output_path.display()
                );
                summary.succeeded += 1;
            } else {
                let error = record
                    .error
                    .unwrap_or_else(|| "unknown error".to_string());
                warn!("failed to tint {}: {}", record.input_path.display(), error);
                summary
                    .failed
                    .push((record.input_path.display().to_string(), error));
            }

            progress_callback(BatchProgress {
                total_files,
                processed_files,
                failed_tasks: summary.failed.clone(),
            });
        }

        if summary.failed.is_empty() {
            info!("batch completed: {} files tinted", summary.succeeded);
        } else {
            warn!(
                "batch completed with {} failed files out of {}",
                summary.failed.len(),
                total_files
            );
        }

        summary
    }
}
