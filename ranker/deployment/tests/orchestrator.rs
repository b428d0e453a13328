use {
    alloy::{
        primitives::{Address, address},
        signers::local::PrivateKeySigner,
    },
    assertor::*,
    ranker_deployment::{
        ConfigRegistry, DeployError, DeploymentResult, DeploymentSettings, Orchestrator,
        RunOutcome, RunState, VerificationOutcome,
        signers::{DEFAULT_MNEMONIC, derive_signers},
    },
    ranker_testing::{
        Call, CallLog, ChainFailure, MOCK_CHAIN_ID, MOCK_CONTRACT_ADDRESS, MockChainClient,
        MockVerifier, mock_artifact, setup_tracing_subscriber,
    },
};

const GOERLI_ENDPOINT: Address = address!("bfD2135BFfbb0B5378b56643c2Df8a87552Bfa23");

fn signers(count: usize) -> Vec<PrivateKeySigner> {
    derive_signers(DEFAULT_MNEMONIC, count).unwrap()
}

fn deployed(outcome: RunOutcome) -> DeploymentResult {
    match outcome {
        RunOutcome::Deployed(result) => result,
        RunOutcome::NotFound(err) => panic!("expected a deployment, got: {err}"),
    }
}

#[tokio::test]
async fn unknown_network_touches_nothing() {
    setup_tracing_subscriber(tracing::Level::DEBUG);

    let chain = MockChainClient::new();
    let log = chain.call_log().clone();
    let orchestrator = Orchestrator::new(chain, DeploymentSettings::default());

    let outcome = orchestrator
        .run(
            "unknown-chain",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(2),
        )
        .await
        .unwrap();

    assert!(matches!(&outcome, RunOutcome::NotFound(err) if err.network == "unknown-chain"));
    assert_that!(outcome.state()).is_equal_to(RunState::Aborted);
    assert_that!(log.calls()).is_empty();
}

#[tokio::test]
async fn single_signer_is_rejected_before_any_call() {
    let chain = MockChainClient::new();
    let log = chain.call_log().clone();
    let orchestrator = Orchestrator::new(chain, DeploymentSettings::default());

    let err = orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(1),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DeployError::PreconditionViolated {
            index: 1,
            available: 1
        }
    ));
    assert_that!(log.calls()).is_empty();
}

#[tokio::test]
async fn deploys_from_second_signer_with_endpoint_argument() {
    let chain = MockChainClient::new();
    let log = chain.call_log().clone();
    let orchestrator = Orchestrator::new(chain, DeploymentSettings::default());
    let signers = signers(2);
    let artifact = mock_artifact("RankerDaoBridge");

    let result = deployed(
        orchestrator
            .run("goerli", &ConfigRegistry::ranker_dao_bridge(), &artifact, &signers)
            .await
            .unwrap(),
    );

    assert_that!(result.contract_address).is_equal_to(MOCK_CONTRACT_ADDRESS);
    assert_that!(result.deployer).is_equal_to(signers[1].address());
    assert_that!(result.cross_chain_id).is_equal_to(10121);
    assert_that!(result.verification).is_equal_to(VerificationOutcome::Skipped);
    assert_that!(result.state).is_equal_to(RunState::Done);

    let calls = log.calls();
    assert_that!(calls.len()).is_equal_to(2);
    match &calls[0] {
        Call::Submit { from, code } => {
            assert_that!(*from).is_equal_to(signers[1].address());
            assert_that!(code.to_vec()).is_equal_to(artifact.deploy_code(GOERLI_ENDPOINT).to_vec());
            assert_that!(&code[code.len() - 20..]).is_equal_to(GOERLI_ENDPOINT.as_slice());
        },
        other => panic!("expected a submission first, got {other:?}"),
    }
    assert!(matches!(calls[1], Call::Wait { confirmations: 1, .. }));
}

#[tokio::test]
async fn reports_the_address_given_by_the_chain() {
    let address = address!("a16E02E87b7454126E5E10d957A927A7F5B5d2be");
    let orchestrator = Orchestrator::new(
        MockChainClient::new().with_contract_address(address),
        DeploymentSettings::default(),
    )
    .with_verifier(MockVerifier::succeeding("guid-1"));

    let result = deployed(
        orchestrator
            .run(
                "bsc-testnet",
                &ConfigRegistry::test_messaging(),
                &mock_artifact("TestMessaging"),
                &signers(2),
            )
            .await
            .unwrap(),
    );

    assert_that!(result.contract_address).is_equal_to(address);
    assert_that!(result.state).is_equal_to(RunState::Done);
    assert_that!(result.verification).is_equal_to(VerificationOutcome::Verified {
        guid: "guid-1".to_string(),
    });
}

#[tokio::test]
async fn receipt_address_wins_over_the_computed_one() {
    let receipt_address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");
    let log = CallLog::default();
    let orchestrator = Orchestrator::new(
        MockChainClient::new()
            .with_call_log(log.clone())
            .with_receipt_address(receipt_address),
        DeploymentSettings::default(),
    )
    .with_verifier(MockVerifier::succeeding("guid-3").with_call_log(log.clone()));

    let result = deployed(
        orchestrator
            .run(
                "goerli",
                &ConfigRegistry::ranker_dao_bridge(),
                &mock_artifact("RankerDaoBridge"),
                &signers(2),
            )
            .await
            .unwrap(),
    );

    assert_that!(result.contract_address).is_equal_to(receipt_address);
    assert_that!(result.contract_address).is_not_equal_to(MOCK_CONTRACT_ADDRESS);
    assert_that!(result.state).is_equal_to(RunState::Done);
    assert!(log.calls().iter().any(|call| matches!(
        call,
        Call::Verify { address, .. } if *address == receipt_address
    )));
}

#[tokio::test]
async fn failed_verification_keeps_the_deployment() {
    let orchestrator = Orchestrator::new(MockChainClient::new(), DeploymentSettings::default())
        .with_verifier(MockVerifier::failing("Unable to locate ContractCode"));

    let result = deployed(
        orchestrator
            .run(
                "goerli",
                &ConfigRegistry::ranker_dao_bridge(),
                &mock_artifact("RankerDaoBridge"),
                &signers(2),
            )
            .await
            .unwrap(),
    );

    assert_that!(result.contract_address).is_equal_to(MOCK_CONTRACT_ADDRESS);
    assert_that!(result.state).is_equal_to(RunState::Done);
    assert!(matches!(
        result.verification,
        VerificationOutcome::Failed { reason } if reason.contains("Unable to locate ContractCode")
    ));
}

#[tokio::test]
async fn phases_run_in_order() {
    let log = CallLog::default();
    let orchestrator = Orchestrator::new(
        MockChainClient::new().with_call_log(log.clone()),
        DeploymentSettings {
            confirmations: 3,
            expected_chain_id: Some(MOCK_CHAIN_ID),
            ..Default::default()
        },
    )
    .with_verifier(MockVerifier::succeeding("guid-2").with_call_log(log.clone()));

    orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(2),
        )
        .await
        .unwrap();

    let chain_id = log.position(|call| matches!(call, Call::ChainId)).unwrap();
    let submit = log.position(|call| matches!(call, Call::Submit { .. })).unwrap();
    let wait = log.position(|call| matches!(call, Call::Wait { .. })).unwrap();
    let verify = log.position(|call| matches!(call, Call::Verify { .. })).unwrap();

    assert!(chain_id < submit && submit < wait && wait < verify);
    assert_that!(log.on_chain_calls()).is_equal_to(2);
    assert!(matches!(log.calls()[wait], Call::Wait { confirmations: 3, .. }));
    assert!(matches!(
        &log.calls()[verify],
        Call::Verify { address, contract }
            if *address == MOCK_CONTRACT_ADDRESS
                && contract == "contracts/RankerDaoBridge.sol:RankerDaoBridge"
    ));
}

#[tokio::test]
async fn rejected_submission_is_not_waited_on() {
    let verifier = MockVerifier::succeeding("never");
    let chain = MockChainClient::new()
        .with_call_log(verifier.call_log().clone())
        .failing_on(ChainFailure::Submit);
    let log = chain.call_log().clone();
    let orchestrator =
        Orchestrator::new(chain, DeploymentSettings::default()).with_verifier(verifier);
    let signers = signers(2);

    let err = orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        DeployError::Submission { network, signer, .. }
            if network == "goerli" && *signer == signers[1].address()
    ));
    assert_that!(log.calls().len()).is_equal_to(1);
}

#[tokio::test]
async fn lost_confirmation_is_fatal_and_not_retried() {
    let chain = MockChainClient::new().failing_on(ChainFailure::Wait);
    let log = chain.call_log().clone();
    let tx_hash = chain.tx_hash();
    let orchestrator = Orchestrator::new(chain, DeploymentSettings::default());

    let err = orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(2),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Confirmation { tx_hash: hash, .. } if hash == tx_hash));
    assert_that!(log.calls().len()).is_equal_to(2);
}

#[tokio::test]
async fn reverted_deployment_is_fatal() {
    let orchestrator = Orchestrator::new(
        MockChainClient::new().failing_on(ChainFailure::Revert),
        DeploymentSettings::default(),
    )
    .with_verifier(MockVerifier::succeeding("never"));

    let err = orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(2),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Reverted { .. }));
}

#[tokio::test]
async fn wrong_chain_is_caught_before_submission() {
    let chain = MockChainClient::new().with_chain_id(97);
    let log = chain.call_log().clone();
    let orchestrator = Orchestrator::new(chain, DeploymentSettings {
        expected_chain_id: Some(5),
        ..Default::default()
    });

    let err = orchestrator
        .run(
            "goerli",
            &ConfigRegistry::ranker_dao_bridge(),
            &mock_artifact("RankerDaoBridge"),
            &signers(2),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DeployError::ChainIdMismatch {
            expected: 5,
            actual: 97,
            ..
        }
    ));
    assert_that!(log.on_chain_calls()).is_equal_to(0);
}
