use crate::{
    core::{
        MashqError,
        Sample,
    },
    features::FEATURE_LEN,
    templates::lesson_letters,
};

/// Where the session stands. There is no terminal failure state: every
/// failure leaves the flow somewhere it can be resumed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialState {
    Idle,
    DrawingLetter(usize),
    AwaitingUpload,
    AllLettersDrawn,
    AwaitingTraining,
    Done,
}

/// Pure session state machine for one tutorial lesson. Owns the sample
/// buffer; performs no I/O. Network completions are fed back in through the
/// `on_*` methods by whoever polls the task manager, so every transition
/// happens on a single coordinating context.
pub struct TutorialFlow {
    lesson_index: usize,
    letter_index: usize,
    state: TutorialState,
    samples: Vec<Sample>,
    last_error: Option<String>,
}

impl TutorialFlow {
    pub fn new(lesson_index: usize) -> Result<Self, MashqError> {
        lesson_letters(lesson_index)?;

        Ok(Self {
            lesson_index,
            letter_index: 0,
            state: TutorialState::Idle,
            samples: Vec::new(),
            last_error: None,
        })
    }

    pub fn lesson_index(&self) -> usize {
        self.lesson_index
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The failure reason surfaced by the most recent upload or training
    /// attempt, until the next successful transition clears it.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn letters(&self) -> &'static [&'static str] {
        lesson_letters(self.lesson_index).expect("lesson index validated in new()")
    }

    pub fn current_letter(&self) -> Option<&'static str> {
        match self.state {
            TutorialState::DrawingLetter(_) | TutorialState::AwaitingUpload => {
                self.letters().get(self.letter_index).copied()
            }
            _ => None,
        }
    }

    /// Fraction of the lesson reached, matching the on-screen progress bar.
    pub fn progress(&self) -> f32 {
        let count = self.letters().len();
        (self.letter_index.min(count) as f32 + 1.0).min(count as f32) / count as f32
    }

    pub fn start(&mut self) {
        if self.state == TutorialState::Idle {
            self.state = TutorialState::DrawingLetter(0);
        }
    }

    /// Buffers one traced-glyph sample for the current letter and moves to
    /// `AwaitingUpload`. The caller dispatches the PNG upload and reports
    /// back through [`Self::on_upload_result`].
    pub fn submit(&mut self, sample: Sample) -> Result<(), MashqError> {
        let index = match self.state {
            TutorialState::DrawingLetter(index) => index,
            other => {
                return Err(MashqError::Custom(format!(
                    "cannot submit a sample in state {:?}",
                    other
                )))
            }
        };

        let expected = self.letters()[index];
        if sample.label != expected {
            return Err(MashqError::Custom(format!(
                "sample labeled '{}' but the current letter is '{}'",
                sample.label, expected
            )));
        }

        if sample.features.len() != FEATURE_LEN {
            return Err(MashqError::Custom(format!(
                "sample has {} features, expected {}",
                sample.features.len(),
                FEATURE_LEN
            )));
        }

        self.samples.push(sample);
        self.state = TutorialState::AwaitingUpload;
        Ok(())
    }

    /// Applies the per-letter upload outcome. Success advances to the next
    /// letter (or to `AllLettersDrawn` after the last one); failure drops the
    /// buffered sample and returns to the same letter so the user can retry.
    pub fn on_upload_result(&mut self, result: Result<(), String>) {
        if self.state != TutorialState::AwaitingUpload {
            return;
        }

        match result {
            Ok(()) => {
                self.last_error = None;
                self.letter_index += 1;
                if self.letter_index >= self.letters().len() {
                    self.state = TutorialState::AllLettersDrawn;
                } else {
                    self.state = TutorialState::DrawingLetter(self.letter_index);
                }
            }
            Err(reason) => {
                self.samples.pop();
                self.last_error = Some(reason);
                self.state = TutorialState::DrawingLetter(self.letter_index);
            }
        }
    }

    /// Hands the accumulated lesson samples out for the batch upload and
    /// moves to `AwaitingTraining`. Valid exactly once per pass; failures
    /// reported through [`Self::on_dataset_upload_result`] return the flow
    /// here so the batch can be re-dispatched.
    pub fn begin_batch_upload(&mut self) -> Result<Vec<Sample>, MashqError> {
        if self.state != TutorialState::AllLettersDrawn {
            return Err(MashqError::Custom(format!(
                "cannot start the batch upload in state {:?}",
                self.state
            )));
        }

        self.state = TutorialState::AwaitingTraining;
        Ok(self.samples.clone())
    }

    pub fn on_dataset_upload_result(&mut self, result: Result<usize, String>) {
        if self.state != TutorialState::AwaitingTraining {
            return;
        }

        match result {
            Ok(_) => self.last_error = None,
            Err(reason) => {
                // Batch never landed; back to the trigger point.
                self.last_error = Some(reason);
                self.state = TutorialState::AllLettersDrawn;
            }
        }
    }

    /// Applies the training outcome. Failure keeps the flow in
    /// `AwaitingTraining`: the samples are already uploaded, so training can
    /// be retried on its own.
    pub fn on_training_result(&mut self, result: Result<String, String>) {
        if self.state != TutorialState::AwaitingTraining {
            return;
        }

        match result {
            Ok(_) => {
                self.last_error = None;
                self.state = TutorialState::Done;
            }
            Err(reason) => {
                self.last_error = Some(reason);
            }
        }
    }

    /// Starts the lesson over with an empty sample buffer, so a second pass
    /// uploads exactly its own samples.
    pub fn restart(&mut self) {
        self.letter_index = 0;
        self.samples.clear();
        self.last_error = None;
        self.state = TutorialState::DrawingLetter(0);
    }
}
