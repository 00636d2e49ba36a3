//! Trains the digit classifier on a CSV training set, then reports per-query
//! answers and total accuracy on a held-out test set.
//!
//! Usage: `digit-nn [config.json]` (defaults match the reference run when no
//! config is given). Set `RUST_LOG=info` or `debug` for progress detail.

use std::env;
use std::process;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use digit_nn::data::bitmap::write_sample_png;
use digit_nn::data::csv::{load_digits_csv, DigitSet, IMAGE_SIDE, NUM_CLASSES, PIXELS_PER_DIGIT};
use digit_nn::train::trainer::argmax;
use digit_nn::{encode_target, evaluate, train_epoch, EpochStats, Network, TrainConfig};

fn main() {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match TrainConfig::load_json(&path) {
            Ok(config) => {
                info!("loaded config from {}", path);
                config
            }
            Err(e) => {
                eprintln!("failed to load config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => TrainConfig::default(),
    };
    debug!("config: {:?}", config);

    let train_set = load_or_exit(&config.train_path, config.train_rows);
    info!(
        "loaded {} training rows from {}",
        train_set.len(),
        config.train_path
    );

    if let Some(path) = &config.sample_png {
        match write_sample_png(
            &train_set.pixels[0],
            IMAGE_SIDE as u32,
            IMAGE_SIDE as u32,
            path,
        ) {
            Ok(()) => info!(
                "wrote first sample (label {}) to {}",
                train_set.labels[0], path
            ),
            Err(e) => eprintln!("could not write sample image '{}': {}", path, e),
        }
    }

    let seed = config.seed.unwrap_or_else(unix_time_seed);
    info!("rng seed = {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut network = Network::new(
        PIXELS_PER_DIGIT,
        config.nhiddens,
        NUM_CLASSES,
        config.learning_rate,
        config.max_steps,
        &mut rng,
    );

    let targets: Vec<Vec<f32>> = train_set
        .labels
        .iter()
        .map(|&label| encode_target(label, NUM_CLASSES))
        .collect();

    info!("training for {} epochs...", config.epochs);
    let t_total = Instant::now();
    for epoch in 1..=config.epochs {
        let t_epoch = Instant::now();
        let mean_error = train_epoch(&mut network, &train_set.pixels, &targets);
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            samples: train_set.len(),
            mean_error,
            elapsed_ms: t_epoch.elapsed().as_millis() as u64,
        };
        info!(
            "epoch {}/{}: mean squared error {:.6} ({} ms)",
            stats.epoch, stats.total_epochs, stats.mean_error, stats.elapsed_ms
        );
        if let Ok(line) = serde_json::to_string(&stats) {
            debug!("{}", line);
        }
    }
    info!("training took {:.3} seconds", t_total.elapsed().as_secs_f64());

    let train_accuracy = evaluate(&mut network, &train_set.pixels, &train_set.labels);
    info!("training-set accuracy = {:.6}", train_accuracy);

    let test_set = load_or_exit(&config.test_path, config.test_rows);
    info!(
        "loaded {} test rows from {}",
        test_set.len(),
        config.test_path
    );

    let mut correct = 0usize;
    for (input, &label) in test_set.pixels.iter().zip(test_set.labels.iter()) {
        let outputs = network.query(input);
        let answer = argmax(outputs);
        println!(
            "queried. our answer {} ({:.6} conf) - correct answer {}",
            answer, outputs[answer], label
        );
        if answer == label as usize {
            correct += 1;
        }
    }
    let accuracy = correct as f32 / test_set.len() as f32;
    println!("total accuracy = {:.6}", accuracy);
}

fn load_or_exit(path: &str, max_rows: usize) -> DigitSet {
    match load_digits_csv(path, max_rows) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn unix_time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
