use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{
        DatasetId,
        Sample,
    },
    mlaas::MlaasClient,
};

/// Owns the async runtime and a result channel polled from the single
/// coordinating thread. Network completions never mutate session state
/// directly; they are delivered as `TaskResult`s and applied by the poller,
/// which keeps flow transitions serialized.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn check_connection(&self, client: Arc<MlaasClient>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { client.get_version().await.is_ok() });

            let _ = sender.send(TaskResult::Connection(connected));
        });
    }

    /// Uploads one cropped glyph image. At-most-once: a failure is reported
    /// and the caller decides whether to resubmit.
    pub fn upload_sample(
        &self,
        client: Arc<MlaasClient>,
        png_bytes: Vec<u8>,
        letter_index: usize,
        dsid: DatasetId,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let filename = format!("user_letter_{}.png", letter_index);

            let result = runtime.block_on(async {
                client
                    .upload_png(&png_bytes, &filename, dsid)
                    .await
                    .map(|_| filename.clone())
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::SampleUploaded { letter_index, result });
        });
    }

    pub fn upload_dataset(
        &self,
        client: Arc<MlaasClient>,
        samples: Vec<Sample>,
        dsid: DatasetId,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let count = samples.len();

            let result = runtime.block_on(async {
                client.upload_dataset(&samples, dsid).await.map(|_| count).map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DatasetUploaded(result));
        });
    }

    pub fn train_model(&self, client: Arc<MlaasClient>, dsid: DatasetId) {
        let (sender, runtime) = self.task_context();

        let _ = sender.send(TaskResult::StatusMessage("Learning your handwriting style...".to_string()));

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.train_model(dsid).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::TrainingComplete(result));
        });
    }

    pub fn predict(&self, client: Arc<MlaasClient>, features: Vec<f64>, dsid: DatasetId) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.predict(&features, dsid).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::Prediction(result));
        });
    }
}
