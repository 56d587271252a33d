use k8s_openapi::api::core::v1::Node;
use k8s_test_framework::lock;
use kube::{api::ListParams, Api};
use rbac_e2e_tests::*;
use tracing::info;

const OPERATOR_NAMESPACE: &str = "default";
const OPERATOR_DEPLOYMENT: &str = "deployment/rbac-operator";

/// This test validates that the cluster API answers at all; every other
/// scenario builds on that.
#[tokio::test]
async fn api_working() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = lock();
    init();

    let client = make_client().await?;
    let nodes = Api::<Node>::all(client)
        .list(&ListParams::default())
        .await?;
    assert!(!nodes.items.is_empty());

    Ok(())
}

/// This test validates that the controller deployment itself is rolled out
/// and available before any behavior is asserted against it.
#[tokio::test]
async fn operator_deployment_available() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = lock();
    init();

    let framework = make_framework();

    info!(message = "Waiting for the operator rollout to complete.");
    framework
        .wait_for_rollout(
            OPERATOR_NAMESPACE,
            OPERATOR_DEPLOYMENT,
            vec!["--timeout=60s"],
        )
        .await?;

    Ok(())
}
