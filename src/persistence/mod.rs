use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
};

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::DatasetId;

#[cfg(test)]
mod persistence_tests;

const APP_NAME: &str = "mashq";

pub const SETTINGS_FILE: &str = "settings.json";
pub const PROGRESS_FILE: &str = "lesson_progress.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    println!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Where the model service lives and which dataset this installation feeds.
/// The dataset id is configuration, never a hard-coded constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server_url: String,
    pub dsid: DatasetId,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { server_url: "http://localhost:8000".to_string(), dsid: 1 }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        save_json(self, SETTINGS_FILE)
    }
}

/// Which lessons have been completed, and when.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonProgress {
    completed: BTreeMap<usize, DateTime<Utc>>,
}

impl LessonProgress {
    pub fn load() -> Self {
        load_json_or_default(PROGRESS_FILE)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        save_json(self, PROGRESS_FILE)
    }

    pub fn mark_complete(&mut self, lesson_index: usize) {
        self.completed.entry(lesson_index).or_insert_with(Utc::now);
    }

    pub fn is_complete(&self, lesson_index: usize) -> bool {
        self.completed.contains_key(&lesson_index)
    }

    pub fn completed_at(&self, lesson_index: usize) -> Option<DateTime<Utc>> {
        self.completed.get(&lesson_index).copied()
    }
}
