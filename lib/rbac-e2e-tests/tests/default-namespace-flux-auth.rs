use std::collections::BTreeMap;

use indoc::indoc;
use k8s_test_framework::{lock, manifest, namespace, retry::RetryPolicy};
use rbac_e2e_tests::*;
use tracing::info;

const ORGANIZATION: &str = indoc! {r#"
    apiVersion: security.rbac-operator.io/v1alpha1
    kind: Organization
    metadata:
      name: test
"#};

/// This test validates that registering an organization makes the
/// controller grant the flux service accounts write access in the default
/// namespace, and that the grant is withdrawn with the organization.
#[tokio::test]
async fn flux_service_account_bindings() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = lock();
    init();

    let org_name = "test";
    let org_namespace_name = format!("org-{org_name}");
    let cluster_namespace_name = "r9b5q";
    let expected_role_bindings = ["write-all-customer-sa"];

    let framework = make_framework();
    let client = make_client().await?;
    let policy = RetryPolicy::default();

    info!(message = "Creating org and cluster namespaces.");
    let org_namespace = framework
        .namespace(namespace::Config::from_namespace(
            &namespace::make_namespace(
                org_namespace_name.clone(),
                Some(BTreeMap::from([(
                    ORGANIZATION_LABEL.to_owned(),
                    org_namespace_name.clone(),
                )])),
            ),
        )?)
        .await?;
    let cluster_namespace = framework
        .namespace(namespace::Config::from_namespace(
            &namespace::make_namespace(
                cluster_namespace_name.to_owned(),
                Some(BTreeMap::from([
                    (ORGANIZATION_LABEL.to_owned(), org_namespace_name.clone()),
                    (CLUSTER_LABEL.to_owned(), cluster_namespace_name.to_owned()),
                ])),
            ),
        )?)
        .await?;

    info!(message = "Creating organization.");
    let organization = framework
        .manifest(manifest::Config::from_resource_string(ORGANIZATION)?)
        .await?;

    info!(message = "Checking for expected role bindings.");
    role_bindings_present(&client, "default", &policy, &expected_role_bindings).await?;

    info!(message = "Deleting organization and namespaces.");
    drop(organization);
    drop(cluster_namespace);
    drop(org_namespace);

    info!(message = "Checking that the role bindings are gone.");
    role_bindings_absent(&client, "default", &policy, &expected_role_bindings).await?;

    Ok(())
}
