use serde::Serialize;

use crate::lib::usage::PodSummary;

/// Top-level output structure containing metadata and per-pod summaries
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub metadata: ReportMetadata,
    pub pods: Vec<PodSummary>,
}

/// Metadata about the report generation
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub namespace: String,
    pub total_pods: usize,
    pub total_containers: usize,
}

impl UsageReport {
    /// Create a new UsageReport
    pub fn new(namespace: String, pods: Vec<PodSummary>) -> Self {
        let total_containers = pods.iter().map(|p| p.containers).sum();

        Self {
            metadata: ReportMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                namespace,
                total_pods: pods.len(),
                total_containers,
            },
            pods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::quantity::{CpuQuantity, MemoryQuantity};

    #[test]
    fn test_report_counts_pods_and_containers() {
        let pods = vec![
            PodSummary::new(
                "web-1".to_string(),
                MemoryQuantity::new(1024, "Ki"),
                CpuQuantity::new(100, "n"),
                2,
            )
            .unwrap(),
            PodSummary::new(
                "web-2".to_string(),
                MemoryQuantity::new(2048, "Ki"),
                CpuQuantity::new(200, "n"),
                3,
            )
            .unwrap(),
        ];

        let report = UsageReport::new("default".to_string(), pods);
        assert_eq!(report.metadata.namespace, "default");
        assert_eq!(report.metadata.total_pods, 2);
        assert_eq!(report.metadata.total_containers, 5);
    }

    #[test]
    fn test_report_serializes_canonical_units() {
        let pods = vec![
            PodSummary::new(
                "web-1".to_string(),
                MemoryQuantity::new(3072, "Ki"),
                CpuQuantity::new(750_000_000, "n"),
                2,
            )
            .unwrap(),
        ];

        let report = UsageReport::new("default".to_string(), pods);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pods"][0]["name"], "web-1");
        assert_eq!(json["pods"][0]["cpu_usage"]["value"], 0.75);
        assert_eq!(json["pods"][0]["cpu_usage"]["unit"], "cores");
        assert_eq!(json["pods"][0]["memory_usage"]["value"], 3.0);
        assert_eq!(json["pods"][0]["memory_usage"]["unit"], "MiB");
    }
}
