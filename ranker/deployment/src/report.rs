//! Tables printed for the operator.

use {
    crate::{ConfigRegistry, DeploymentConfig, DeploymentResult, NetworkProfile, VerificationOutcome},
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    colored::Colorize,
    prettytable::{Cell, Row, Table},
};

fn header(titles: &[&str]) -> Row {
    Row::new(
        titles
            .iter()
            .map(|title| Cell::new(title).style_spec("bFg"))
            .collect(),
    )
}

fn pair(key: &str, value: impl ToString) -> Row {
    Row::new(vec![Cell::new(key), Cell::new(&value.to_string())])
}

/// The resolved configuration and the deploying account, shown before
/// anything is sent.
pub fn config_table(config: &DeploymentConfig, contract_name: &str, deployer: Address) -> Table {
    let mut table = Table::new();

    table.set_titles(header(&["Setting", "Value"]));
    table.add_row(pair("Contract", contract_name));
    table.add_row(pair("Network", config.network_name));
    table.add_row(pair("Cross-chain id", config.cross_chain_id));
    table.add_row(pair("Endpoint", config.endpoint_address));
    table.add_row(Row::new(vec![
        Cell::new("Deployer"),
        Cell::new(&deployer.to_string()).style_spec("Fy"),
    ]));

    table
}

pub fn summary_table(result: &DeploymentResult) -> Table {
    let verification = match &result.verification {
        VerificationOutcome::Verified { .. } => result.verification.to_string().green(),
        VerificationOutcome::Skipped => result.verification.to_string().yellow(),
        VerificationOutcome::Failed { .. } => result.verification.to_string().red(),
    };

    let mut table = Table::new();

    table.set_titles(header(&["Deployment", ""]));
    table.add_row(pair("Contract", &result.contract));
    table.add_row(pair("Network", &result.network));
    table.add_row(pair("Address", result.contract_address));
    table.add_row(pair("Transaction", result.tx_hash));
    table.add_row(pair(
        "Block",
        result
            .block_number
            .map_or_else(|| "pending".to_string(), |n| n.to_string()),
    ));
    table.add_row(pair("Gas used", result.gas_used));
    table.add_row(pair("Deployer", result.deployer));
    table.add_row(pair("Verification", verification));

    table
}

/// One row per registered network.
pub fn registry_table(registry: &ConfigRegistry) -> Table {
    let mut table = Table::new();

    table.set_titles(header(&["Network", "Cross-chain id", "Endpoint"]));
    for entry in registry.entries() {
        table.add_row(Row::new(vec![
            Cell::new(entry.network_name),
            Cell::new(&entry.cross_chain_id.to_string()),
            Cell::new(&entry.endpoint_address.to_string()),
        ]));
    }

    table
}

pub fn networks_table<'a, I>(networks: I) -> Table
where
    I: IntoIterator<Item = (&'a str, &'a NetworkProfile)>,
{
    let mut table = Table::new();

    table.set_titles(header(&["Network", "Chain id", "RPC"]));
    for (name, profile) in networks {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(
                &profile
                    .chain_id
                    .map_or_else(|| "-".to_string(), |id| id.to_string()),
            ),
            Cell::new(&profile.url),
        ]));
    }

    table
}

/// Derived accounts, marking the one that deploys.
pub fn accounts_table(signers: &[PrivateKeySigner], deployer_index: usize) -> Table {
    let mut table = Table::new();

    table.set_titles(header(&["#", "Address", ""]));
    for (index, signer) in signers.iter().enumerate() {
        let role = if index == deployer_index {
            "deployer"
        } else {
            ""
        };

        table.add_row(Row::new(vec![
            Cell::new(&index.to_string()),
            Cell::new(&signer.address().to_string()),
            Cell::new(role).style_spec("Fy"),
        ]));
    }

    table
}

// ----------------------------------- tests -----------------------------------
