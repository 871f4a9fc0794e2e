#[cfg(test)]
mod tests {
    use crate::persistence::{
        LessonProgress,
        Settings,
    };

    #[test]
    fn default_settings_point_at_the_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://localhost:8000");
        assert_eq!(settings.dsid, 1);
    }

    #[test]
    fn settings_survive_serialization() {
        let settings = Settings { server_url: "http://10.0.0.5:8000".to_string(), dsid: 3 };

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.server_url, settings.server_url);
        assert_eq!(restored.dsid, settings.dsid);
    }

    #[test]
    fn lesson_progress_marks_and_keeps_first_completion() {
        let mut progress = LessonProgress::default();
        assert!(!progress.is_complete(0));

        progress.mark_complete(0);
        assert!(progress.is_complete(0));
        assert!(!progress.is_complete(1));

        let first = progress.completed_at(0).unwrap();
        progress.mark_complete(0);
        assert_eq!(progress.completed_at(0), Some(first), "re-completion keeps the first time");
    }

    #[test]
    fn lesson_progress_round_trips_through_json() {
        let mut progress = LessonProgress::default();
        progress.mark_complete(2);

        let json = serde_json::to_string(&progress).unwrap();
        let restored: LessonProgress = serde_json::from_str(&json).unwrap();

        assert!(restored.is_complete(2));
        assert_eq!(restored.completed_at(2), progress.completed_at(2));
    }
}
