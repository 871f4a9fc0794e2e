use std::{
    env,
    process,
    sync::Arc,
    thread,
    time::{
        Duration,
        Instant,
    },
};

use mashq::{
    canvas::TraceCanvas,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        MashqError,
        Point,
        Sample,
    },
    features::{
        crop_to_canonical,
        encode_png,
        extract_features,
    },
    mlaas::MlaasClient,
    persistence::{
        LessonProgress,
        Settings,
    },
    templates::{
        letter_template,
        trace_points,
    },
    tutorial::{
        TutorialFlow,
        TutorialState,
    },
};
use rand::{
    rng,
    Rng,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const TASK_TIMEOUT: Duration = Duration::from_secs(120);

fn main() {
    let lesson_number: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    let settings = Settings::load();
    println!(
        "Lesson {} against {} (dataset {})",
        lesson_number, settings.server_url, settings.dsid
    );

    let mut flow = match TutorialFlow::new(lesson_number.saturating_sub(1)) {
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let client = Arc::new(MlaasClient::new(&settings.server_url));
    let mut manager = TaskManager::new();

    manager.check_connection(client.clone());
    match wait_for(&mut manager, CONNECT_TIMEOUT, |r| matches!(r, TaskResult::Connection(_))) {
        Some(TaskResult::Connection(true)) => println!("Model service is online."),
        _ => {
            eprintln!("Model service at {} is unreachable.", client.base_url());
            process::exit(1);
        }
    }

    let mut canvas = TraceCanvas::new(400.0, 800.0, 2.0);
    flow.start();

    while let Some(letter) = flow.current_letter() {
        let index = flow.samples().len();
        println!(
            "Lesson {}: trace the letter {} ({:.0}%)",
            lesson_number,
            letter,
            flow.progress() * 100.0
        );

        let sample = match trace_and_capture(&mut canvas, letter) {
            Ok(sample) => sample,
            Err(e) => {
                eprintln!("Capture failed for {}: {}", letter, e);
                process::exit(1);
            }
        };

        let png_bytes = sample.1;
        if let Err(e) = flow.submit(sample.0) {
            eprintln!("{}", e);
            process::exit(1);
        }

        manager.upload_sample(client.clone(), png_bytes, index, settings.dsid);

        let uploaded =
            wait_for(&mut manager, TASK_TIMEOUT, |r| matches!(r, TaskResult::SampleUploaded { .. }));
        match uploaded {
            Some(TaskResult::SampleUploaded { result, .. }) => {
                let outcome = result.map(|_| ());
                if let Err(reason) = &outcome {
                    eprintln!("Failed to upload cropped image for letter {}: {}", letter, reason);
                }
                flow.on_upload_result(outcome);
                if flow.last_error().is_some() {
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Timed out waiting for the upload of letter {}", letter);
                process::exit(1);
            }
        }
    }

    assert_eq!(flow.state(), TutorialState::AllLettersDrawn);

    let batch = match flow.begin_batch_upload() {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    manager.upload_dataset(client.clone(), batch, settings.dsid);
    match wait_for(&mut manager, TASK_TIMEOUT, |r| matches!(r, TaskResult::DatasetUploaded(_))) {
        Some(TaskResult::DatasetUploaded(result)) => {
            flow.on_dataset_upload_result(result);
            if let Some(reason) = flow.last_error() {
                eprintln!("Failed to upload user data: {}", reason);
                process::exit(1);
            }
            println!("Data uploaded successfully. Training model...");
        }
        _ => {
            eprintln!("Timed out waiting for the dataset upload");
            process::exit(1);
        }
    }

    manager.train_model(client.clone(), settings.dsid);
    match wait_for(&mut manager, TASK_TIMEOUT, |r| matches!(r, TaskResult::TrainingComplete(_))) {
        Some(TaskResult::TrainingComplete(result)) => {
            flow.on_training_result(result);
            match flow.state() {
                TutorialState::Done => println!("Model trained successfully!"),
                _ => {
                    eprintln!(
                        "Model training failed: {}",
                        flow.last_error().unwrap_or("unknown error")
                    );
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Timed out waiting for training");
            process::exit(1);
        }
    }

    let mut progress = LessonProgress::load();
    progress.mark_complete(flow.lesson_index());
    if let Err(e) = progress.save() {
        eprintln!("Failed to save lesson progress: {}", e);
    }
}

/// Traces the letter's template onto the canvas with a little hand tremor,
/// then runs the capture pipeline: snapshot, crop to the bounding box,
/// extract features, encode the cropped PNG for upload.
fn trace_and_capture(
    canvas: &mut TraceCanvas,
    letter: &str,
) -> Result<(Sample, Vec<u8>), MashqError> {
    let template = letter_template(letter, canvas.bounding_box().center())?;
    let mut rng = rng();

    for polyline in trace_points(&template, 48) {
        let mut points = polyline.into_iter();
        if let Some(first) = points.next() {
            canvas.begin_stroke(first);
            for point in points {
                let jitter_x: f64 = rng.random_range(-1.2..1.2);
                let jitter_y: f64 = rng.random_range(-1.2..1.2);
                canvas.move_to(Point::new(point.x + jitter_x, point.y + jitter_y));
            }
            canvas.end_stroke();
        }
    }

    let start = Instant::now();
    let capture = canvas.capture();
    let cropped = crop_to_canonical(&capture, canvas.bounding_box(), canvas.scale())?;
    let features = extract_features(&cropped)?;
    let png_bytes = encode_png(&cropped)?;
    println!("Capture pipeline took: {:?}", start.elapsed());

    canvas.clear();

    Ok((Sample::new(features, letter), png_bytes))
}

fn wait_for(
    manager: &mut TaskManager,
    timeout: Duration,
    accept: impl Fn(&TaskResult) -> bool,
) -> Option<TaskResult> {
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        for result in manager.poll_results() {
            if let TaskResult::StatusMessage(message) = &result {
                println!("{}", message);
                continue;
            }
            if accept(&result) {
                return Some(result);
            }
        }
        thread::sleep(Duration::from_millis(25));
    }

    None
}
