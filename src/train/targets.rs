/// Target value for the correct class.
pub const TARGET_HIGH: f32 = 1.0;

/// Target value for every other class. Kept above zero so the inactive
/// classes still sit on a usable part of the sigmoid gradient; an exact 0.0
/// target lands in the flat tail.
pub const TARGET_LOW: f32 = 0.1;

/// Builds the target vector for a labelled sample:
/// label 1 of 10 becomes `[0.1, 1.0, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]`.
pub fn encode_target(label: u8, noutputs: usize) -> Vec<f32> {
    assert!(
        (label as usize) < noutputs,
        "label {} out of range for {} outputs",
        label,
        noutputs
    );

    let mut target = vec![TARGET_LOW; noutputs];
    target[label as usize] = TARGET_HIGH;
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_marks_one_class_high() {
        let target = encode_target(3, 10);
        assert_eq!(target.len(), 10);
        for (i, &v) in target.iter().enumerate() {
            if i == 3 {
                assert_eq!(v, TARGET_HIGH);
            } else {
                assert_eq!(v, TARGET_LOW);
            }
        }
    }

    #[test]
    fn encode_handles_edge_labels() {
        assert_eq!(encode_target(0, 2), vec![TARGET_HIGH, TARGET_LOW]);
        assert_eq!(encode_target(1, 2), vec![TARGET_LOW, TARGET_HIGH]);
    }

    #[test]
    #[should_panic(expected = "label 5 out of range for 3 outputs")]
    fn encode_rejects_label_beyond_output_count() {
        encode_target(5, 3);
    }
}
