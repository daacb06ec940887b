pub mod assistant;
pub mod matters;
pub mod metrics;
pub mod providers;

pub use assistant::Assistant;
pub use matters::MatterRegistry;
pub use metrics::{get_metrics, init_metrics};
