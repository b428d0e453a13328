use {
    crate::ArtifactError,
    alloy::{
        json_abi::JsonAbi,
        primitives::{Address, Bytes},
        sol_types::SolValue,
    },
    serde::{Deserialize, de::DeserializeOwned},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// A compiled contract, as emitted by Hardhat under `artifacts/`.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    /// Path of the Solidity source, relative to the project root.
    pub source_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
    /// Build-info file holding the compiler input, used for verification.
    pub build_info: Option<PathBuf>,
}

/// The part of a Hardhat build-info file needed to verify a contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// e.g. `0.8.18+commit.87f61d96`
    pub solc_long_version: String,
    /// The solc standard JSON input.
    pub input: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    contract_name: String,
    source_name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatDebugFile {
    build_info: PathBuf,
}

impl ContractArtifact {
    /// Location of a contract's artifact, assuming the source file is named
    /// after the contract, as Hardhat projects conventionally do.
    pub fn artifact_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
        artifacts_dir
            .join("contracts")
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"))
    }

    /// Load a contract's artifact, and locate its build-info through the
    /// `.dbg.json` file next to it, if any.
    pub fn load(artifacts_dir: &Path, contract_name: &str) -> Result<Self, ArtifactError> {
        let path = Self::artifact_path(artifacts_dir, contract_name);
        let mut artifact = Self::from_hardhat(read_json(&path)?)?;

        let debug_path = path.with_file_name(format!("{contract_name}.dbg.json"));
        if debug_path.exists() {
            let debug: HardhatDebugFile = read_json(&debug_path)?;
            let dir = debug_path.parent().unwrap_or_else(|| Path::new("."));
            artifact.build_info = Some(dir.join(debug.build_info));
        }

        Ok(artifact)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact = serde_json::from_str(json).map_err(|source| ArtifactError::Json {
            path: PathBuf::from("<inline>"),
            source,
        })?;

        Self::from_hardhat(artifact)
    }

    fn from_hardhat(artifact: HardhatArtifact) -> Result<Self, ArtifactError> {
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode {
                contract: artifact.contract_name,
            });
        }

        let inputs = artifact
            .abi
            .constructor()
            .map(|constructor| {
                constructor
                    .inputs
                    .iter()
                    .map(|param| param.ty.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        if inputs != ["address"] {
            return Err(ArtifactError::UnexpectedConstructor {
                contract: artifact.contract_name,
                found: inputs.join(", "),
            });
        }

        Ok(Self {
            contract_name: artifact.contract_name,
            source_name: artifact.source_name,
            abi: artifact.abi,
            bytecode: artifact.bytecode,
            build_info: None,
        })
    }

    /// `<source>:<contract>`, the form explorers expect.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    /// ABI-encoded constructor arguments, binding the contract to `endpoint`.
    pub fn constructor_args(&self, endpoint: Address) -> Bytes {
        endpoint.abi_encode().into()
    }

    /// Creation bytecode followed by the encoded constructor arguments.
    pub fn deploy_code(&self, endpoint: Address) -> Bytes {
        [
            self.bytecode.as_ref(),
            self.constructor_args(endpoint).as_ref(),
        ]
        .concat()
        .into()
    }

    pub fn load_build_info(&self) -> Result<BuildInfo, ArtifactError> {
        let path = self
            .build_info
            .as_ref()
            .ok_or_else(|| ArtifactError::MissingBuildInfo {
                contract: self.contract_name.clone(),
            })?;

        BuildInfo::load(path)
    }
}

impl BuildInfo {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    /// Compiler version in the `v0.8.18+commit.87f61d96` form.
    pub fn compiler_version(&self) -> String {
        format!("v{}", self.solc_long_version)
    }
}

fn read_json<T>(path: &Path) -> Result<T, ArtifactError>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{address, hex},
        assertor::*,
        serde_json::json,
    };

    fn artifact_json(constructor_inputs: serde_json::Value, bytecode: &str) -> String {
        json!({
            "_format": "hh-sol-artifact-1",
            "contractName": "RankerDaoBridge",
            "sourceName": "contracts/RankerDaoBridge.sol",
            "abi": [
                {
                    "type": "constructor",
                    "stateMutability": "nonpayable",
                    "inputs": constructor_inputs,
                },
                {
                    "type": "function",
                    "name": "lzEndpoint",
                    "stateMutability": "view",
                    "inputs": [],
                    "outputs": [{ "name": "", "type": "address", "internalType": "contract ILayerZeroEndpoint" }],
                },
            ],
            "bytecode": bytecode,
            "deployedBytecode": "0x6080",
            "linkReferences": {},
            "deployedLinkReferences": {},
        })
        .to_string()
    }

    fn endpoint_input() -> serde_json::Value {
        json!([{ "name": "_endpoint", "type": "address", "internalType": "address" }])
    }

    #[test]
    fn deploy_code_appends_endpoint() {
        let artifact =
            ContractArtifact::from_json(&artifact_json(endpoint_input(), "0x60806040")).unwrap();
        let endpoint = address!("bfD2135BFfbb0B5378b56643c2Df8a87552Bfa23");

        let code = artifact.deploy_code(endpoint);

        assert_that!(code.len()).is_equal_to(4 + 32);
        assert_that!(&code[..4]).is_equal_to(&hex!("60806040")[..]);
        assert_that!(&code[4..16]).is_equal_to(&[0u8; 12][..]);
        assert_that!(&code[16..]).is_equal_to(endpoint.as_slice());
        assert_that!(artifact.fully_qualified_name().as_str())
            .is_equal_to("contracts/RankerDaoBridge.sol:RankerDaoBridge");
    }

    #[test]
    fn constructor_must_take_one_address() {
        let two_args = json!([
            { "name": "_endpoint", "type": "address", "internalType": "address" },
            { "name": "_fee", "type": "uint256", "internalType": "uint256" },
        ]);

        let err = ContractArtifact::from_json(&artifact_json(two_args, "0x6080")).unwrap_err();

        assert!(matches!(
            err,
            ArtifactError::UnexpectedConstructor { found, .. } if found == "address, uint256"
        ));
    }

    #[test]
    fn abstract_contract_is_rejected() {
        let err = ContractArtifact::from_json(&artifact_json(endpoint_input(), "0x")).unwrap_err();

        assert!(matches!(err, ArtifactError::EmptyBytecode { .. }));
    }

    #[test]
    fn load_from_hardhat_layout() {
        let dir = tempfile::tempdir().unwrap();
        let contract_dir = dir.path().join("contracts").join("RankerDaoBridge.sol");
        fs::create_dir_all(&contract_dir).unwrap();
        fs::create_dir_all(dir.path().join("build-info")).unwrap();

        fs::write(
            contract_dir.join("RankerDaoBridge.json"),
            artifact_json(endpoint_input(), "0x6080"),
        )
        .unwrap();
        fs::write(
            contract_dir.join("RankerDaoBridge.dbg.json"),
            json!({
                "_format": "hh-sol-dbg-1",
                "buildInfo": "../../build-info/4f2a.json",
            })
            .to_string(),
        )
        .unwrap();
        fs::write(
            dir.path().join("build-info").join("4f2a.json"),
            json!({
                "_format": "hh-sol-build-info-1",
                "solcVersion": "0.8.18",
                "solcLongVersion": "0.8.18+commit.87f61d96",
                "input": { "language": "Solidity", "sources": {} },
            })
            .to_string(),
        )
        .unwrap();

        let artifact = ContractArtifact::load(dir.path(), "RankerDaoBridge").unwrap();
        let build_info = artifact.load_build_info().unwrap();

        assert_that!(artifact.bytecode.to_vec()).is_equal_to(vec![0x60, 0x80]);
        assert_that!(build_info.solc_long_version.as_str()).is_equal_to("0.8.18+commit.87f61d96");
        assert_that!(build_info.input["language"].as_str()).is_equal_to(Some("Solidity"));
    }

    #[test]
    fn missing_artifact_reports_path() {
        let dir = tempfile::tempdir().unwrap();

        let err = ContractArtifact::load(dir.path(), "TestMessaging").unwrap_err();

        assert!(matches!(
            err,
            ArtifactError::Io { path, .. } if path.ends_with("contracts/TestMessaging.sol/TestMessaging.json")
        ));
    }
}
