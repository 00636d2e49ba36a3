pub mod epoch_stats;
pub mod targets;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use targets::encode_target;
pub use train_config::TrainConfig;
pub use trainer::{argmax, evaluate, train_epoch};
