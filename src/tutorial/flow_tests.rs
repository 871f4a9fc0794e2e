#[cfg(test)]
mod tests {
    use crate::{
        core::Sample,
        features::FEATURE_LEN,
        tutorial::{
            TutorialFlow,
            TutorialState,
        },
    };

    fn sample_for(letter: &str) -> Sample {
        // A plausible glyph: mostly background with some ink.
        let mut features = vec![0.0; FEATURE_LEN];
        features[500] = 255.0;
        Sample::new(features, letter)
    }

    fn started_flow() -> TutorialFlow {
        let mut flow = TutorialFlow::new(0).unwrap();
        flow.start();
        flow
    }

    #[test]
    fn invalid_lesson_index_is_rejected() {
        assert!(TutorialFlow::new(4).is_err());
        assert!(TutorialFlow::new(0).is_ok());
    }

    #[test]
    fn seven_letters_accumulate_exactly_seven_samples() {
        let mut flow = started_flow();
        let letters = flow.letters();
        let mut batch_triggers = 0;

        for (i, letter) in letters.iter().enumerate() {
            assert_eq!(flow.state(), TutorialState::DrawingLetter(i));
            assert_eq!(flow.current_letter(), Some(*letter));

            flow.submit(sample_for(letter)).unwrap();
            assert_eq!(flow.state(), TutorialState::AwaitingUpload);

            flow.on_upload_result(Ok(()));
            if flow.state() == TutorialState::AllLettersDrawn {
                batch_triggers += 1;
            }
        }

        assert_eq!(batch_triggers, 1, "batch upload must be triggered exactly once");
        assert_eq!(flow.samples().len(), 7);
        for (sample, letter) in flow.samples().iter().zip(letters) {
            assert_eq!(sample.label, *letter);
            assert_eq!(sample.features.len(), FEATURE_LEN);
        }
    }

    #[test]
    fn upload_failure_returns_to_the_same_letter() {
        let mut flow = started_flow();
        let letter = flow.current_letter().unwrap();

        flow.submit(sample_for(letter)).unwrap();
        flow.on_upload_result(Err("network error".to_string()));

        // Failed sample is dropped so a resubmission does not duplicate it.
        assert_eq!(flow.state(), TutorialState::DrawingLetter(0));
        assert_eq!(flow.samples().len(), 0);
        assert_eq!(flow.last_error(), Some("network error"));

        flow.submit(sample_for(letter)).unwrap();
        flow.on_upload_result(Ok(()));
        assert_eq!(flow.state(), TutorialState::DrawingLetter(1));
        assert_eq!(flow.samples().len(), 1);
        assert_eq!(flow.last_error(), None);
    }

    #[test]
    fn mislabeled_or_malformed_samples_are_rejected() {
        let mut flow = started_flow();

        // Lesson 1 starts with alif, not ba.
        assert!(flow.submit(sample_for("ب")).is_err());

        let letter = flow.current_letter().unwrap();
        let truncated = Sample::new(vec![0.0; 100], letter);
        assert!(flow.submit(truncated).is_err());

        assert_eq!(flow.state(), TutorialState::DrawingLetter(0));
        assert!(flow.samples().is_empty());
    }

    fn complete_lesson(flow: &mut TutorialFlow) {
        for letter in flow.letters() {
            flow.submit(sample_for(letter)).unwrap();
            flow.on_upload_result(Ok(()));
        }
    }

    #[test]
    fn training_failure_is_recoverable_without_reupload() {
        let mut flow = started_flow();
        complete_lesson(&mut flow);
        assert_eq!(flow.state(), TutorialState::AllLettersDrawn);

        let batch = flow.begin_batch_upload().unwrap();
        assert_eq!(batch.len(), 7);
        assert_eq!(flow.state(), TutorialState::AwaitingTraining);

        flow.on_dataset_upload_result(Ok(7));
        flow.on_training_result(Err("network error".to_string()));

        // No reset: samples stay uploaded, training alone is retried.
        assert_eq!(flow.state(), TutorialState::AwaitingTraining);
        assert_eq!(flow.samples().len(), 7);
        assert_eq!(flow.last_error(), Some("network error"));

        flow.on_training_result(Ok("accuracy 0.97".to_string()));
        assert_eq!(flow.state(), TutorialState::Done);
        assert_eq!(flow.last_error(), None);
    }

    #[test]
    fn dataset_upload_failure_allows_redispatch() {
        let mut flow = started_flow();
        complete_lesson(&mut flow);

        flow.begin_batch_upload().unwrap();
        flow.on_dataset_upload_result(Err("service unavailable".to_string()));

        assert_eq!(flow.state(), TutorialState::AllLettersDrawn);
        assert_eq!(flow.samples().len(), 7);

        // The whole batch goes out again; the service overwrites, so nothing
        // is duplicated.
        let batch = flow.begin_batch_upload().unwrap();
        assert_eq!(batch.len(), 7);
    }

    #[test]
    fn batch_upload_is_only_valid_once_per_pass() {
        let mut flow = started_flow();
        complete_lesson(&mut flow);

        assert!(flow.begin_batch_upload().is_ok());
        assert!(flow.begin_batch_upload().is_err());
    }

    #[test]
    fn restart_clears_the_sample_buffer() {
        let mut flow = started_flow();
        complete_lesson(&mut flow);
        flow.begin_batch_upload().unwrap();
        flow.on_dataset_upload_result(Ok(7));
        flow.on_training_result(Ok("trained".to_string()));
        assert_eq!(flow.state(), TutorialState::Done);

        flow.restart();

        assert_eq!(flow.state(), TutorialState::DrawingLetter(0));
        assert!(flow.samples().is_empty());
        assert_eq!(flow.current_letter(), Some("ا"));
    }

    #[test]
    fn progress_tracks_the_letter_index() {
        let mut flow = started_flow();
        assert!((flow.progress() - 1.0 / 7.0).abs() < 1e-6);

        let letter = flow.current_letter().unwrap();
        flow.submit(sample_for(letter)).unwrap();
        flow.on_upload_result(Ok(()));

        assert!((flow.progress() - 2.0 / 7.0).abs() < 1e-6);
    }
}
