use {
    crate::{
        VerifyError,
        artifact::BuildInfo,
        verify::{VerificationRequest, Verifier},
    },
    async_trait::async_trait,
    reqwest::Client,
    serde::Deserialize,
    std::time::Duration,
    tracing::{debug, info},
    url::Url,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Etherscan-family API endpoint of a network, if it has one.
pub fn etherscan_api_url(network: &str) -> Option<&'static str> {
    match network {
        "ethereum" => Some("https://api.etherscan.io/api"),
        "goerli" => Some("https://api-goerli.etherscan.io/api"),
        "bsc" => Some("https://api.bscscan.com/api"),
        "bscTestnet" | "bsc-testnet" => Some("https://api-testnet.bscscan.com/api"),
        _ => None,
    }
}

/// Environment variable holding the explorer API key of a network.
pub fn api_key_env(network: &str) -> Option<&'static str> {
    match network {
        "ethereum" | "goerli" => Some("ETHERSCAN_API_KEY"),
        "bsc" | "bscTestnet" | "bsc-testnet" => Some("BSCSCAN_API_KEY"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct EtherscanResponse {
    status: String,
    message: String,
    result: String,
}

/// Verifies contracts through the `verifysourcecode` action of an
/// Etherscan-compatible explorer API.
#[derive(Debug, Clone)]
pub struct EtherscanVerifier {
    client: Client,
    api_url: Url,
    api_key: String,
}

impl EtherscanVerifier {
    pub fn new(api_url: Url, api_key: impl Into<String>) -> Result<Self, VerifyError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_url,
            api_key: api_key.into(),
        })
    }

    /// Build a verifier for one of the networks with a known explorer, reading
    /// its API key through `lookup`. `api_url` overrides the known endpoint.
    pub fn for_network<F>(
        network: &str,
        api_url: Option<&str>,
        lookup: F,
    ) -> Result<Self, VerifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = api_url
            .or_else(|| etherscan_api_url(network))
            .ok_or_else(|| VerifyError::UnsupportedNetwork {
                network: network.to_string(),
            })?;

        let env = api_key_env(network).unwrap_or("ETHERSCAN_API_KEY");
        let api_key = lookup(env)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| VerifyError::MissingApiKey {
                network: network.to_string(),
                env: env.to_string(),
            })?;

        Self::new(api_url.parse()?, api_key)
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[async_trait]
impl Verifier for EtherscanVerifier {
    type Error = VerifyError;

    async fn verify(&self, request: &VerificationRequest) -> Result<String, Self::Error> {
        let build_info = match &request.build_info {
            Some(path) => BuildInfo::load(path)?,
            None => {
                return Err(VerifyError::Artifact(
                    crate::ArtifactError::MissingBuildInfo {
                        contract: request.contract.clone(),
                    },
                ));
            },
        };

        let form = [
            ("apikey", self.api_key.clone()),
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("contractaddress", request.address.to_checksum(None)),
            ("sourceCode", build_info.input.to_string()),
            ("codeformat", "solidity-standard-json-input".to_string()),
            ("contractname", request.contract.clone()),
            ("compilerversion", build_info.compiler_version()),
            // Sic, this is how the API spells it.
            ("constructorArguements", hex::encode(&request.constructor_args)),
        ];

        debug!(
            api_url = %self.api_url,
            contract = %request.contract,
            address = %request.address,
            "Submitting source for verification"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json::<EtherscanResponse>()
            .await?;

        if response.status != "1" {
            return Err(VerifyError::Rejected {
                message: response.message,
                result: response.result,
            });
        }

        info!(guid = %response.result, "Verification submitted");

        Ok(response.result)
    }
}

// ----------------------------------- tests -----------------------------------
