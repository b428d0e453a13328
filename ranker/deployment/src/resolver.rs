use {
    crate::{ConfigRegistry, DeploymentConfig},
    colored::Colorize,
    thiserror::Error,
    tracing::warn,
};

/// The active network has no entry in the registry.
///
/// This is an expected outcome rather than a failure: the caller reports it
/// and stops without touching the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot find a deployment configuration matching network `{network}`")]
pub struct ConfigurationNotFound {
    pub network: String,
}

/// Find the deployment config of the active network.
///
/// Matching is exact and case-sensitive.
pub fn resolve(
    active_network: &str,
    registry: &ConfigRegistry,
) -> Result<DeploymentConfig, ConfigurationNotFound> {
    registry
        .get(active_network)
        .copied()
        .ok_or_else(|| ConfigurationNotFound {
            network: active_network.to_string(),
        })
}

/// [`resolve`], telling the operator when there is nothing to deploy.
pub fn resolve_or_report(
    active_network: &str,
    registry: &ConfigRegistry,
) -> Result<DeploymentConfig, ConfigurationNotFound> {
    resolve(active_network, registry).inspect_err(|not_found| {
        warn!(network = active_network, "No deployment configuration found");
        println!("{} {not_found}; nothing to deploy", "Skipped:".yellow().bold());
    })
}

// ----------------------------------- tests -----------------------------------
