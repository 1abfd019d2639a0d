use kube::{Client, Config, config::KubeConfigOptions};
use log::{debug, info};

use crate::lib::metrics::PodMetrics;
use crate::{
    Config as UsageConfig, ConfigError::InvalidValue, KubernetesError::ApiError,
    KubernetesError::ConnectionFailed, Result,
};

pub struct MetricsLoader {
    client: Client,
    config: UsageConfig,
}

impl MetricsLoader {
    pub async fn new(config: UsageConfig) -> Result<Self> {
        let client = if let Some(ref context) = config.context {
            debug!("Using custom context for Kubeconfig");
            let custom_config = Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            })
            .await
            .map_err(|e| InvalidValue(e.to_string()))?;

            debug!("Creating a Kubernetes client using custom Kubeconfig");
            Client::try_from(custom_config).map_err(|e| ConnectionFailed(e.to_string()))?
        } else {
            debug!("Creating a Kubernetes client using default Kubeconfig");
            Client::try_default()
                .await
                .map_err(|e| ConnectionFailed(e.to_string()))?
        };

        info!("Successfully created Kubernetes client");
        Ok(Self { client, config })
    }

    /// List pod metrics for the configured namespace from
    /// `metrics.k8s.io/v1beta1`. One blocking read, no retries.
    pub async fn pod_metrics(&self) -> Result<Vec<PodMetrics>> {
        let lp = kube::api::ListParams::default();
        let namespace = &self.config.namespace;

        debug!("Listing pod metrics in {namespace} namespace");
        let api: kube::Api<PodMetrics> = kube::Api::namespaced(self.client.clone(), namespace);
        let metrics = api.list(&lp).await.map_err(|e| ApiError(e.to_string()))?;

        info!("Retrieved metrics for {} pods", metrics.items.len());
        Ok(metrics.items)
    }
}
