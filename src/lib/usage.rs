use std::fmt;

use log::debug;
use serde::Serialize;

use crate::lib::metrics::{Container, PodMetrics};
use crate::lib::quantity::{CpuQuantity, MemoryQuantity};
use crate::{QuantityError, Result, UsageError};

/// Aggregated, canonical-unit view of one pod.
///
/// Construction is the single normalization point: totals arrive in whatever
/// unit the containers reported and leave as cores and MiB. Immutable after.
#[derive(Debug, Clone, Serialize)]
pub struct PodSummary {
    pub name: String,
    pub memory_usage: MemoryQuantity,
    pub cpu_usage: CpuQuantity,
    pub containers: usize,
}

impl PodSummary {
    pub fn new(
        name: String,
        memory_usage: MemoryQuantity,
        cpu_usage: CpuQuantity,
        containers: usize,
    ) -> Result<Self, QuantityError> {
        Ok(Self {
            name,
            memory_usage: memory_usage.to_mebibytes()?,
            cpu_usage: cpu_usage.to_cores()?,
            containers,
        })
    }
}

impl fmt::Display for PodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = " ".repeat(self.name.len());
        write!(
            f,
            "{} => Number of containers in pod: {}\n{} ╚> Memory: {}\n{} ╚> CPU: {}",
            self.name, self.containers, padding, self.memory_usage, padding, self.cpu_usage
        )
    }
}

/// Sum one pod's container readings into running CPU and memory totals.
///
/// The first container seeds each total (and its unit); subsequent containers
/// must report in the same unit, which the accumulation enforces. The metrics
/// API reports nanocores and kibibytes in practice, so a mismatch here means
/// a malformed response.
fn pod_totals(containers: &[Container]) -> Result<(CpuQuantity, MemoryQuantity), QuantityError> {
    let mut total_cpu = CpuQuantity::default();
    let mut total_memory = MemoryQuantity::default();

    for (idx, container) in containers.iter().enumerate() {
        let cpu = CpuQuantity::parse(&container.usage.cpu)?;
        let memory = MemoryQuantity::parse(&container.usage.memory)?;
        if idx == 0 {
            total_cpu = cpu;
            total_memory = memory;
        } else {
            total_cpu.accumulate(&cpu)?;
            total_memory.accumulate(&memory)?;
        }
    }

    Ok((total_cpu, total_memory))
}

/// Lazily transform a metrics API response into per-pod summaries, in
/// response order.
///
/// Single-pass: each pod is parsed, summed, and normalized as the iterator
/// advances. Any parse, unit-mismatch, or unsupported-unit failure yields an
/// `Err` tagged with the pod name; the caller is expected to stop there, so
/// one bad container aborts the whole report.
pub fn summarize_pods(
    pods: impl IntoIterator<Item = PodMetrics>,
) -> impl Iterator<Item = Result<PodSummary>> {
    pods.into_iter().map(|pod| {
        let name = pod.metadata.name.unwrap_or_default();
        let count = pod.containers.len();
        debug!("Aggregating {count} containers for pod {name}");
        pod_totals(&pod.containers)
            .and_then(|(cpu, memory)| PodSummary::new(name.clone(), memory, cpu, count))
            .map_err(|source| UsageError::Pod { pod: name, source })
    })
}
