//! Resolve command implementation.
//!
//! Prints every value resolved for one cloud in a single report, together
//! with the source each name segment came from.

use crate::error::CliError;
use crate::utils::{build_context, require_cloud, GlobalOptions};
use clap::{Args, ValueEnum};
use e2e_options::{Cloud, ClusterName, Resolved};
use serde::Serialize;
use std::path::PathBuf;

/// Print every value resolved for a cloud.
#[derive(Args)]
pub struct ResolveCommand {
    /// Cloud to resolve for (aws, gcp or azure)
    #[arg(value_name = "CLOUD")]
    pub cloud: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the resolve command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `key: value` lines
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// The resolved values for one cloud.
#[derive(Debug, Serialize)]
pub struct Resolution {
    cloud: Cloud,
    owner: Resolved<String>,
    uid: Resolved<String>,
    cluster_name: String,
    region: String,
    base_domain: String,
    options_file: Option<PathBuf>,
    kubeadmin_user: String,
    report_file: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cloud = Cloud::parse_provisioned(require_cloud(&self.cloud)?)?;
        let ctx = build_context(global)?;

        let region = ctx.region(cloud.as_str())?.to_string();
        let base_domain = ctx.base_domain(cloud.as_str())?.to_string();
        let owner = ctx.owner();
        let uid = ctx.uid()?;
        let cluster_name = ClusterName::new(owner.value.clone(), cloud, uid.value.clone());

        let resolution = Resolution {
            cloud,
            owner,
            uid,
            cluster_name: cluster_name.to_string(),
            region,
            base_domain,
            options_file: ctx.store().source_path().map(PathBuf::from),
            kubeadmin_user: ctx.overrides().kubeadmin_user.clone(),
            report_file: ctx.overrides().report_file.clone(),
        };

        let output = match self.format {
            OutputFormat::Text => format_text(&resolution),
            OutputFormat::Json => serde_json::to_string_pretty(&resolution)? + "\n",
            OutputFormat::Yaml => {
                serde_yaml::to_string(&resolution).map_err(e2e_options::Error::from)?
            }
        };
        print!("{output}");
        Ok(())
    }
}

fn format_text(r: &Resolution) -> String {
    let options_file = r
        .options_file
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());

    let rows = [
        ("cloud", r.cloud.to_string()),
        ("owner", format!("{} ({})", r.owner.value, r.owner.source)),
        ("uid", format!("{} ({})", r.uid.value, r.uid.source)),
        ("cluster-name", r.cluster_name.clone()),
        ("region", r.region.clone()),
        ("base-domain", r.base_domain.clone()),
        ("options-file", options_file),
        ("kubeadmin-user", r.kubeadmin_user.clone()),
        ("report-file", r.report_file.clone()),
    ];

    rows.iter()
        .map(|(key, value)| format!("{:<16}{value}\n", format!("{key}:")))
        .collect()
}
