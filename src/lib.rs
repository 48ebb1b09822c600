pub mod error;
pub mod file_io;
pub mod job;
pub mod normalizer;
pub mod stats;

// Re-export main types for convenient access
pub use error::NormalizeError;
pub use job::NormalizeJob;
pub use normalizer::{normalize, shared_normalizer, Normalized, Normalizer};

// Re-export reporting types
pub use stats::{write_stats_json, JobReport, NormalizeStats};
