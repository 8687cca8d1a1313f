use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, warn};

use crate::core::{TintRecord, TintTask};
use crate::processing::{load_image, save_image, tint_image};
use crate::utils::TintResult;

const DEFAULT_WORKERS: usize = 4;

/// Semaphore-capped pool running per-file tint jobs on blocking threads.
///
/// Tasks share nothing mutable and each writes its own output path, so
/// running them concurrently changes only throughput. A pool of one worker
/// processes files strictly sequentially.
#[derive(Clone)]
pub struct WorkerPool {
    active_workers: Arc<Mutex<usize>>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
}

impl WorkerPool {
    pub fn new(worker_count: Option<usize>) -> Self {
        let worker_count = worker_count.unwrap_or(DEFAULT_WORKERS).max(1);
        Self {
            active_workers: Arc::new(Mutex::new(0)),
            semaphore: Arc::new(Semaphore::new(worker_count)),
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run one tint job: decode, blend, encode.
    ///
    /// The job's outcome is captured in the returned record; a failure
    /// never propagates out of the pool, so one bad file cannot abort a
    /// batch.
    pub async fn process(&self, task: TintTask) -> TintRecord {
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                warn!("failed to acquire worker: {e}");
                return TintRecord::failure(&task, format!("failed to acquire worker: {e}"));
            }
        };

        {
            let mut count = self.active_workers.lock().await;
            *count += 1;
            debug!(
                "worker started - active: {}/{}, task: {}",
                *count,
                self.worker_count,
                task.input_path.display()
            );
        }

        let job = task.clone();
        let record = match tokio::task::spawn_blocking(move || run_job(job)).await {
            Ok(record) => record,
            Err(e) => {
                warn!("tint job for {} died: {e}", task.input_path.display());
                TintRecord::failure(&task, format!("tint job died: {e}"))
            }
        };

        {
            let mut count = self.active_workers.lock().await;
            *count -= 1;
            debug!(
                "worker finished - active: {}/{}",
                *count, self.worker_count
            );
        }

        record
    }

    pub async fn active_workers(&self) -> usize {
        *self.active_workers.lock().await
    }
}

/// The blocking per-file pipeline.
fn run_job(task: TintTask) -> TintRecord {
    match tint_file(&task) {
        Ok(()) => TintRecord::success(&task),
        Err(e) => TintRecord::failure(&task, e.to_string()),
    }
}

fn tint_file(task: &TintTask) -> TintResult<()> {
    let image = load_image(&task.input_path)?;
    let tinted = tint_image(&image, task.settings.color, task.settings.strength);
    save_image(&tinted, &task.output_path)
}
