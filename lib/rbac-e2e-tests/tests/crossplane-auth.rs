use indoc::indoc;
use k8s_test_framework::{lock, manifest, retry::RetryPolicy};
use rbac_e2e_tests::*;
use tracing::info;

const TRIGGER_CLUSTER_ROLE_NAME: &str = "crossplane-edit";

const TRIGGER_CLUSTER_ROLE: &str = indoc! {r#"
    apiVersion: rbac.authorization.k8s.io/v1
    kind: ClusterRole
    metadata:
      name: crossplane-edit
    rules: []
"#};

fn derived_binding_name(trigger_name: &str) -> String {
    format!("rbac-op-{trigger_name}-to-customer-admin")
}

/// This test validates that creating the crossplane trigger cluster role
/// makes the controller bind it to the customer admin group, and that the
/// binding follows the trigger out of the cluster.
#[tokio::test]
async fn crossplane_auth() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = lock();
    init();

    let expected_binding = derived_binding_name(TRIGGER_CLUSTER_ROLE_NAME);

    let framework = make_framework();
    let client = make_client().await?;
    let policy = RetryPolicy::default();

    info!(message = "Creating crossplane cluster role.");
    let trigger = framework
        .manifest(manifest::Config::from_resource_string(
            TRIGGER_CLUSTER_ROLE,
        )?)
        .await?;

    info!(message = "Checking for the derived cluster role binding.");
    cluster_role_bindings_present(&client, &policy, &[expected_binding.as_str()]).await?;

    info!(message = "Deleting crossplane cluster role.");
    drop(trigger);

    info!(message = "Checking that the derived cluster role binding is gone.");
    cluster_role_bindings_absent(&client, &policy, &[expected_binding.as_str()]).await?;

    Ok(())
}
