use log::debug;

use crate::network::network::Network;

/// One full pass over the sample list, calling [`Network::train_one`] once
/// per (input, target) pair in order. Returns the mean squared output error
/// observed during each sample's final inner step, a cheap progress signal
/// that needs no extra forward passes.
pub fn train_epoch(network: &mut Network, inputs: &[Vec<f32>], targets: &[Vec<f32>]) -> f32 {
    assert!(!inputs.is_empty(), "training set must not be empty");
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );

    let mut total_error = 0.0;

    for (input, target) in inputs.iter().zip(targets.iter()) {
        network.train_one(input, target);
        total_error += squared_error(network.outputs(), target);
    }

    let mean = total_error / inputs.len() as f32;
    debug!("epoch pass over {} samples, mean squared error {}", inputs.len(), mean);
    mean
}

/// Fraction of samples whose argmax output matches the label.
pub fn evaluate(network: &mut Network, inputs: &[Vec<f32>], labels: &[u8]) -> f32 {
    assert_eq!(
        inputs.len(),
        labels.len(),
        "inputs and labels must have equal length"
    );
    if inputs.is_empty() {
        return 0.0;
    }

    let mut correct = 0usize;
    for (input, &label) in inputs.iter().zip(labels.iter()) {
        let outputs = network.query(input);
        if argmax(outputs) == label as usize {
            correct += 1;
        }
    }
    correct as f32 / inputs.len() as f32
}

/// Index of the maximum element in a slice.
pub fn argmax(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn squared_error(outputs: &[f32], target: &[f32]) -> f32 {
    outputs
        .iter()
        .zip(target.iter())
        .map(|(o, t)| (t - o) * (t - o))
        .sum()
}
