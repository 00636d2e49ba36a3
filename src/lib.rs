pub mod data;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use data::csv::DigitSet;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use train::epoch_stats::EpochStats;
pub use train::targets::encode_target;
pub use train::train_config::TrainConfig;
pub use train::trainer::{evaluate, train_epoch};
