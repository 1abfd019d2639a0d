use clap::Parser;
use log::{debug, info};
use podusage::{
    Cli, Config, MetricsLoader, OutputFormat, Result, UsageReport, init_logger, summarize_pods,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose, cli.quiet)?;

    info!("Starting pod usage report");
    debug!("Namespace: {}", cli.namespace);

    let config = Config::new(cli.namespace.clone(), cli.context.clone());
    let loader = MetricsLoader::new(config).await?;
    let pods = loader.pod_metrics().await?;

    match cli.output {
        OutputFormat::Text => {
            for summary in summarize_pods(pods) {
                println!("{}", summary?);
            }
        }
        OutputFormat::Json => {
            let summaries = summarize_pods(pods).collect::<Result<Vec<_>>>()?;
            let report = UsageReport::new(cli.namespace, summaries);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
