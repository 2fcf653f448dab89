mod frames;

use rehab_base::log_fatal;
use rehab_infer::{ClassifierConfig, ExerciseTracker, InferError};
use std::env;
use std::path::PathBuf;

fn load_config() -> Result<ClassifierConfig, InferError> {
    let mut config = match env::var("REHAB_CONFIG") {
        Ok(path) => ClassifierConfig::from_json_file(path)?,
        Err(_) => ClassifierConfig::default(),
    };
    if let Ok(model_path) = env::var("REHAB_MODEL_PATH") {
        frames::override_model_path(&mut config, &PathBuf::from(model_path));
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    rehab_base::init_stdout_logger();

    let Some(frames_path) = env::args().nth(1).map(PathBuf::from) else {
        log_fatal!("usage: rehab-classify <frames.json>  (REHAB_CONFIG, REHAB_MODEL_PATH optional)");
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => log_fatal!("invalid configuration: {}", e),
    };

    log::info!("Model: {}", config.model_path().display());
    log::info!("Device: {} ({} threads)", config.device, config.intra_threads);

    let persons = frames::load_frames(&frames_path)?;
    log::info!("Loaded {} frames from {}", persons.len(), frames_path.display());

    let mut tracker = ExerciseTracker::load(&config)?;

    for (index, person) in persons.iter().enumerate() {
        match tracker.estimate_exercise_for_frame(person) {
            Ok(result) if result.has_confidence() => {
                println!("frame {index}: {} ({:.1}%)", result.label, result.probability);
            }
            Ok(result) => {
                println!("frame {index}: {} (confidence undefined)", result.label);
            }
            // frames without usable geometry are skipped, everything else is fatal
            Err(InferError::InvalidInput(msg)) => {
                log::warn!("frame {}: skipped: {}", index, msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
        tracker.save_frame(person)?;
    }

    tracker.estimate_exercise();
    Ok(())
}
