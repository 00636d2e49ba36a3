use log::{debug, info};
use rand::Rng;

use crate::math::matrix::{outer_product_into, sigmoid_in_place, Matrix};

/// A three-layer feed-forward network: input layer, one sigmoid hidden
/// layer, one sigmoid output layer.
///
/// Weight matrices are stored output-major: the matrix carrying activations
/// from layer A to layer B is shaped `len(B) x len(A)`, so a forward step is
/// a plain matrix-vector product. `input_to_hidden_weights` is
/// `nhiddens x ninputs` and `hidden_to_output_weights` is
/// `noutputs x nhiddens`.
///
/// All activation, error, and delta buffers are allocated once here and
/// rewritten wholesale on every pass, so per-sample work allocates nothing.
pub struct Network {
    ninputs: usize,
    nhiddens: usize,
    noutputs: usize,
    max_steps: usize,
    learning_rate: f32,

    // The only state that persists across training steps.
    input_to_hidden_weights: Matrix,
    hidden_to_output_weights: Matrix,

    // Per-sample scratch, reused across samples.
    inputs: Vec<f32>,
    hiddens: Vec<f32>,
    outputs: Vec<f32>,
    output_errors: Vec<f32>,
    hidden_errors: Vec<f32>,
    hiddens_deltas: Vec<f32>,
    outputs_deltas: Vec<f32>,
    input_to_hidden_delta_weights: Matrix,
    hidden_to_output_delta_weights: Matrix,
    hidden_to_output_back_weights: Matrix,
}

impl Network {
    /// Allocates a network for the given topology, randomises both weight
    /// matrices from `rng` (each element uniform in `[-0.5, 0.5)`), and
    /// zeroes every scratch buffer.
    ///
    /// `max_steps` is the number of forward/backward repetitions
    /// [`Network::train_one`] performs per sample; values above 1 tend to
    /// overfit individual samples and are the caller's responsibility.
    pub fn new<R: Rng>(
        ninputs: usize,
        nhiddens: usize,
        noutputs: usize,
        learning_rate: f32,
        max_steps: usize,
        rng: &mut R,
    ) -> Network {
        let mut input_to_hidden_weights = Matrix::zeros(nhiddens, ninputs);
        let mut hidden_to_output_weights = Matrix::zeros(noutputs, nhiddens);
        input_to_hidden_weights.randomise(rng);
        hidden_to_output_weights.randomise(rng);

        let sz_ih = ninputs * nhiddens;
        let sz_ho = nhiddens * noutputs;
        let floats = sz_ih * 2 + sz_ho * 3 + ninputs + nhiddens * 3 + noutputs * 3;
        let bytes = floats * std::mem::size_of::<f32>();
        info!(
            "allocated {} bytes ({} kB) for a {}-{}-{} network",
            bytes,
            bytes / 1024,
            ninputs,
            nhiddens,
            noutputs
        );
        debug!("  input->hidden weights: {} floats (x2 with delta scratch)", sz_ih);
        debug!("  hidden->output weights: {} floats (x3 with delta and transpose scratch)", sz_ho);
        debug!(
            "  layer vectors: {} + {}x3 + {}x3 floats",
            ninputs, nhiddens, noutputs
        );

        Network {
            ninputs,
            nhiddens,
            noutputs,
            max_steps,
            learning_rate,
            input_to_hidden_weights,
            hidden_to_output_weights,
            inputs: vec![0.0; ninputs],
            hiddens: vec![0.0; nhiddens],
            outputs: vec![0.0; noutputs],
            output_errors: vec![0.0; noutputs],
            hidden_errors: vec![0.0; nhiddens],
            hiddens_deltas: vec![0.0; nhiddens],
            outputs_deltas: vec![0.0; noutputs],
            input_to_hidden_delta_weights: Matrix::zeros(nhiddens, ninputs),
            hidden_to_output_delta_weights: Matrix::zeros(noutputs, nhiddens),
            hidden_to_output_back_weights: Matrix::zeros(nhiddens, noutputs),
        }
    }

    /// Runs the forward pass and returns the output activations, one sigmoid
    /// value per class. These are independent confidences, not a softmax
    /// distribution; picking a class (argmax) is the caller's job.
    ///
    /// `input` is copied into internal scratch, so the caller's buffer is
    /// free for reuse as soon as this returns. Two calls with the same input
    /// and unchanged weights return bit-identical results.
    pub fn query(&mut self, input: &[f32]) -> &[f32] {
        assert_eq!(
            input.len(),
            self.ninputs,
            "input vector length must equal ninputs"
        );

        self.inputs.copy_from_slice(input);

        self.input_to_hidden_weights
            .mul_vec_into(&self.inputs, &mut self.hiddens);
        sigmoid_in_place(&mut self.hiddens);

        self.hidden_to_output_weights
            .mul_vec_into(&self.hiddens, &mut self.outputs);
        sigmoid_in_place(&mut self.outputs);

        &self.outputs
    }

    /// One training call for a single (input, target) pair: forward pass,
    /// output error, error back-propagation through the transposed output
    /// weights, and in-place learning-rate-scaled updates to both weight
    /// matrices. The whole sequence repeats `max_steps` times.
    ///
    /// The usual target encoding is 1.0 for the correct class and 0.1 for
    /// the rest (see [`crate::train::targets::encode_target`]); that
    /// convention is not validated here. Nothing guards against NaN or
    /// overflow from extreme hyperparameters.
    pub fn train_one(&mut self, input: &[f32], target: &[f32]) {
        assert_eq!(
            target.len(),
            self.noutputs,
            "target vector length must equal noutputs"
        );

        let lr = self.learning_rate;

        for _ in 0..self.max_steps {
            self.query(input);

            for i in 0..self.noutputs {
                self.output_errors[i] = target[i] - self.outputs[i];
            }

            // Transpose the output weights to push the error backwards,
            // distributing it over hidden units by forward contribution.
            self.hidden_to_output_weights
                .transpose_into(&mut self.hidden_to_output_back_weights);
            self.hidden_to_output_back_weights
                .mul_vec_into(&self.output_errors, &mut self.hidden_errors);

            // Output layer: error scaled by the sigmoid derivative, then an
            // outer product with the hidden activations gives the update.
            for i in 0..self.noutputs {
                self.outputs_deltas[i] =
                    self.output_errors[i] * self.outputs[i] * (1.0 - self.outputs[i]);
            }
            outer_product_into(
                &self.outputs_deltas,
                &self.hiddens,
                &mut self.hidden_to_output_delta_weights,
            );
            self.hidden_to_output_weights
                .add_scaled(&self.hidden_to_output_delta_weights, lr);

            // Hidden layer: same shape of update against the raw inputs.
            for i in 0..self.nhiddens {
                self.hiddens_deltas[i] =
                    self.hidden_errors[i] * self.hiddens[i] * (1.0 - self.hiddens[i]);
            }
            outer_product_into(
                &self.hiddens_deltas,
                &self.inputs,
                &mut self.input_to_hidden_delta_weights,
            );
            self.input_to_hidden_weights
                .add_scaled(&self.input_to_hidden_delta_weights, lr);
        }
    }

    /// Output activations from the most recent forward pass.
    pub fn outputs(&self) -> &[f32] {
        &self.outputs
    }

    /// Hidden activations from the most recent forward pass.
    pub fn hiddens(&self) -> &[f32] {
        &self.hiddens
    }

    pub fn ninputs(&self) -> usize {
        self.ninputs
    }

    pub fn nhiddens(&self) -> usize {
        self.nhiddens
    }

    pub fn noutputs(&self) -> usize {
        self.noutputs
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn input_to_hidden_weights(&self) -> &Matrix {
        &self.input_to_hidden_weights
    }

    pub fn hidden_to_output_weights(&self) -> &Matrix {
        &self.hidden_to_output_weights
    }
}
