use serde::{Deserialize, Serialize};

/// External configuration for a training run.
///
/// Every hyperparameter arrives through this struct (or its `Default`); the
/// network itself never chooses one. Input and output sizes are fixed by the
/// digit format and therefore not configurable here.
///
/// `max_steps` (inner repetitions per sample) and `epochs` (outer passes
/// over the whole set) are independent repeat knobs with overlapping effect;
/// raising either trains harder on the same data, raising `max_steps` does
/// so one sample at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Nodes in the hidden layer.
    pub nhiddens: usize,
    pub learning_rate: f32,
    /// Forward/backward repetitions per sample within one training call.
    pub max_steps: usize,
    /// Full passes over the training set.
    pub epochs: usize,
    /// Rows to read from the training CSV.
    pub train_rows: usize,
    /// Rows to read from the test CSV.
    pub test_rows: usize,
    pub train_path: String,
    pub test_path: String,
    /// RNG seed for weight initialization; unix time is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// When set, the first training sample is rendered to this PNG path
    /// before training starts.
    #[serde(default)]
    pub sample_png: Option<String>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            nhiddens: 100,
            learning_rate: 0.3,
            max_steps: 1,
            epochs: 10,
            train_rows: 2000,
            test_rows: 100,
            train_path: "mnist_train.csv".to_string(),
            test_path: "mnist_test.csv".to_string(),
            seed: None,
            sample_png: None,
        }
    }
}

impl TrainConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_run() {
        let config = TrainConfig::default();
        assert_eq!(config.nhiddens, 100);
        assert_eq!(config.learning_rate, 0.3);
        assert_eq!(config.max_steps, 1);
        assert_eq!(config.epochs, 10);
        assert_eq!(config.train_rows, 2000);
        assert_eq!(config.test_rows, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = TrainConfig::default();
        config.seed = Some(1234);
        config.epochs = 3;

        let text = serde_json::to_string(&config).unwrap();
        let back: TrainConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.seed, Some(1234));
        assert_eq!(back.epochs, 3);
        assert_eq!(back.train_path, "mnist_train.csv");
    }

    #[test]
    fn config_files_round_trip() {
        let path = std::env::temp_dir().join("digit_nn_train_config_roundtrip.json");
        let path = path.to_string_lossy().into_owned();

        let mut config = TrainConfig::default();
        config.nhiddens = 64;
        config.sample_png = Some("sample.png".to_string());
        config.save_json(&path).unwrap();

        let back = TrainConfig::load_json(&path).unwrap();
        assert_eq!(back.nhiddens, 64);
        assert_eq!(back.sample_png.as_deref(), Some("sample.png"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let text = r#"{
            "nhiddens": 50,
            "learning_rate": 0.1,
            "max_steps": 2,
            "epochs": 5,
            "train_rows": 100,
            "test_rows": 10,
            "train_path": "train.csv",
            "test_path": "test.csv"
        }"#;
        let config: TrainConfig = serde_json::from_str(text).unwrap();
        assert_eq!(config.nhiddens, 50);
        assert!(config.seed.is_none());
        assert!(config.sample_png.is_none());
    }
}
