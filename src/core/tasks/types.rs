pub enum TaskResult {
    Connection(bool),

    SampleUploaded { letter_index: usize, result: Result<String, String> },
    DatasetUploaded(Result<usize, String>),

    TrainingComplete(Result<String, String>),
    Prediction(Result<String, String>),

    StatusMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Connection(_) => "connection",
            TaskResult::SampleUploaded { .. } => "sample_uploaded",
            TaskResult::DatasetUploaded(_) => "dataset_uploaded",
            TaskResult::TrainingComplete(_) => "training_complete",
            TaskResult::Prediction(_) => "prediction",
            TaskResult::StatusMessage(_) => "status_message",
        }
    }
}
