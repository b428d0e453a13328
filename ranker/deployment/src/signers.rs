use {
    crate::SignerError,
    alloy::signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    std::env,
    tracing::debug,
};

/// Well-known development mnemonic, used when no secret is configured.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Default number of accounts derived from the mnemonic.
pub const DEFAULT_ACCOUNTS: usize = 20;

/// Pick the mnemonic for a network: `MNEMONIC_<NETWORK>` first, then
/// `MNEMONIC`, then [`DEFAULT_MNEMONIC`]. Empty values count as unset.
///
/// `lookup` is the environment; pass `|key| std::env::var(key).ok()` or use
/// [`mnemonic_from_env`].
pub fn resolve_mnemonic<F>(network: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if !network.is_empty() {
        let key = format!("MNEMONIC_{}", network.to_uppercase());
        if let Some(mnemonic) = non_empty(&key) {
            debug!(%key, "Using network-specific mnemonic");
            return mnemonic;
        }
    }

    if let Some(mnemonic) = non_empty("MNEMONIC") {
        debug!("Using global mnemonic");
        return mnemonic;
    }

    debug!("No mnemonic configured, falling back to the development mnemonic");
    DEFAULT_MNEMONIC.to_string()
}

pub fn mnemonic_from_env(network: &str) -> String {
    resolve_mnemonic(network, |key| env::var(key).ok())
}

/// Derive the first `count` accounts of a mnemonic along `m/44'/60'/0'/0/i`.
pub fn derive_signers(mnemonic: &str, count: usize) -> Result<Vec<PrivateKeySigner>, SignerError> {
    if count == 0 {
        return Err(SignerError::NoAccounts);
    }

    (0..count as u32)
        .map(|index| -> Result<PrivateKeySigner, SignerError> {
            MnemonicBuilder::<English>::default()
                .phrase(mnemonic)
                .index(index)?
                .build()
                .map_err(Into::into)
        })
        .collect()
}

// ----------------------------------- tests -----------------------------------
