pub mod arithmetic;
pub mod health;
pub mod metrics;
pub mod root;

pub use arithmetic::{add, divide, multiply, subtract};
pub use health::{health_check, readiness_check};
pub use self::metrics::metrics;
pub use root::root;
