pub mod config;
pub mod config_loader;
pub mod error;
pub mod normal;
pub mod significance;

pub use config::{AppConfig, ExperimentConfig, SeoLimits, SubjectConfig};
pub use config_loader::ConfigLoader;
pub use error::SignificanceError;
pub use normal::{erf, standard_normal_cdf};
pub use significance::{evaluate, ExperimentInput, ExperimentResult, Winner};
