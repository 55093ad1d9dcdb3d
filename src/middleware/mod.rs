pub mod metrics;
pub mod path;
pub mod validation;

pub use self::metrics::track_metrics;
pub use path::IdPath;
pub use validation::ValidatedJson;
