//! Pod Resource Usage Reporter Library
//!
//! This library queries the Kubernetes metrics API for a namespace and
//! aggregates per-container CPU and memory usage into per-pod totals with
//! unit normalization (nanocores/millicores to cores, kibibytes to MiB).

pub mod lib {
    pub mod cli;
    pub mod config;
    pub mod error;
    pub mod kubernetes;
    pub mod logger;
    pub mod metrics;
    pub mod output;
    pub mod quantity;
    pub mod usage;
}

// Re-export commonly used types at the root level for convenience
pub use lib::cli::{Cli, OutputFormat};
pub use lib::config::Config;
pub use lib::error::{ConfigError, KubernetesError, QuantityError, Result, UsageError};
pub use lib::kubernetes::MetricsLoader;
pub use lib::logger::init_logger;
pub use lib::metrics::{Container, PodMetrics, Usage};
pub use lib::output::{ReportMetadata, UsageReport};
pub use lib::quantity::{CpuQuantity, MemoryQuantity, split_quantity};
pub use lib::usage::{PodSummary, summarize_pods};
