//! Whole-pipeline checks: single-sample convergence on a tiny topology, and
//! CSV text through parsing, training, and evaluation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use digit_nn::data::csv::{parse_digits_csv, NUM_CLASSES, PIXELS_PER_DIGIT};
use digit_nn::train::trainer::argmax;
use digit_nn::{encode_target, evaluate, train_epoch, Network};

#[test]
fn single_sample_training_learns_the_preferred_class() {
    // 4-3-2 network, lr 0.3, one inner step; after 500 repetitions on one
    // (input, target) pair the first class must win.
    for seed in [1u64, 2, 3, 42, 1000] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = Network::new(4, 3, 2, 0.3, 1, &mut rng);

        let input = [0.1, 0.2, 0.3, 0.4];
        let target = [1.0, 0.1];
        for _ in 0..500 {
            net.train_one(&input, &target);
        }

        let outputs = net.query(&input);
        assert!(
            outputs[0] > outputs[1],
            "seed {}: outputs were {:?}",
            seed,
            outputs
        );
        assert!(outputs[0] > 0.5, "seed {}: outputs were {:?}", seed, outputs);
    }
}

/// One CSV record: `label` followed by 784 pixels, bright in one vertical
/// half and near-black in the other.
fn synthetic_record(label: u8, bright_top: bool) -> String {
    let mut cells = vec![label.to_string()];
    for i in 0..PIXELS_PER_DIGIT {
        let in_top_half = i < PIXELS_PER_DIGIT / 2;
        let value = if in_top_half == bright_top { 200 } else { 10 };
        cells.push(value.to_string());
    }
    cells.join(",")
}

#[test]
fn csv_pipeline_trains_to_separate_two_patterns() {
    let mut text = String::new();
    for _ in 0..4 {
        text.push_str(&synthetic_record(0, true));
        text.push('\n');
        text.push_str(&synthetic_record(1, false));
        text.push('\n');
    }

    let set = parse_digits_csv(&text, 100).expect("synthetic CSV should parse");
    assert_eq!(set.len(), 8);

    let targets: Vec<Vec<f32>> = set
        .labels
        .iter()
        .map(|&label| encode_target(label, NUM_CLASSES))
        .collect();

    let mut rng = StdRng::seed_from_u64(77);
    let mut net = Network::new(PIXELS_PER_DIGIT, 12, NUM_CLASSES, 0.3, 1, &mut rng);

    let first_error = train_epoch(&mut net, &set.pixels, &targets);
    for _ in 0..80 {
        train_epoch(&mut net, &set.pixels, &targets);
    }
    let final_error = train_epoch(&mut net, &set.pixels, &targets);

    assert!(
        final_error < first_error * 0.5,
        "error only moved from {} to {}",
        first_error,
        final_error
    );
    assert_eq!(evaluate(&mut net, &set.pixels, &set.labels), 1.0);

    // The winning confidence comes from an independent sigmoid, not a
    // softmax, so it just has to be the largest, not close to 1.0.
    let outputs = net.query(&set.pixels[0]);
    assert_eq!(argmax(outputs), set.labels[0] as usize);
}
