use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};

/// Raw per-container usage as reported by `metrics.k8s.io/v1beta1`, e.g.
/// `{"cpu": "250000000n", "memory": "2048Ki"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub cpu: String,
    pub memory: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub usage: Usage,
}

/// One pod's metrics record from `kubectl get --raw
/// /apis/metrics.k8s.io/v1beta1/namespaces/<ns>/pods`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodMetrics {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub window: String,
}

// Custom impls since the metrics API has no types in kube-rs.
impl k8s_openapi::Resource for PodMetrics {
    const API_VERSION: &'static str = "metrics.k8s.io/v1beta1";
    const GROUP: &'static str = "metrics.k8s.io";
    const KIND: &'static str = "PodMetrics";
    const VERSION: &'static str = "v1beta1";
    const URL_PATH_SEGMENT: &'static str = "pods";
    type Scope = k8s_openapi::NamespaceResourceScope;
}

impl k8s_openapi::Metadata for PodMetrics {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &Self::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Self::Ty {
        &mut self.metadata
    }
}
