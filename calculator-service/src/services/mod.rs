pub mod calculator;
pub mod metrics;

pub use calculator::evaluate;
pub use self::metrics::{get_metrics, init_metrics};
