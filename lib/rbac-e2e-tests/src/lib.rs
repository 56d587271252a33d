//! Helpers shared by the `rbac-operator` acceptance scenarios.

use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, RoleBinding};
use k8s_test_framework::{retry::RetryPolicy, wait_for_objects, Framework, Interface, Result};
use kube::{api::ListParams, Api, Client};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

/// Label the controller selects organization namespaces on.
pub const ORGANIZATION_LABEL: &str = "rbac-operator.io/organization";

/// Label the controller selects workload-cluster namespaces on.
pub const CLUSTER_LABEL: &str = "rbac-operator.io/cluster";

static INIT: OnceCell<()> = OnceCell::new();

/// Initialize the logging subsystem, once per test binary.
pub fn init() {
    INIT.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    });
}

/// Create a [`Framework`] from the environment.
pub fn make_framework() -> Framework {
    Framework::new(Interface::from_env())
}

/// Connect to the cluster the ambient kubeconfig points at.
pub async fn make_client() -> Result<Client> {
    Ok(Client::try_default().await?)
}

/// Wait until every named `ClusterRole` exists.
pub async fn cluster_roles_present(
    client: &Client,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<ClusterRole>::all(client.clone());
    wait_for_objects::all_present(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Wait until every named `ClusterRole` is gone.
pub async fn cluster_roles_absent(
    client: &Client,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<ClusterRole>::all(client.clone());
    wait_for_objects::all_absent(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Wait until every named `ClusterRoleBinding` exists.
pub async fn cluster_role_bindings_present(
    client: &Client,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<ClusterRoleBinding>::all(client.clone());
    wait_for_objects::all_present(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Wait until every named `ClusterRoleBinding` is gone.
pub async fn cluster_role_bindings_absent(
    client: &Client,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<ClusterRoleBinding>::all(client.clone());
    wait_for_objects::all_absent(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Wait until every named `RoleBinding` exists in `namespace`.
pub async fn role_bindings_present(
    client: &Client,
    namespace: &str,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<RoleBinding>::namespaced(client.clone(), namespace);
    wait_for_objects::all_present(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Wait until every named `RoleBinding` is gone from `namespace`.
pub async fn role_bindings_absent(
    client: &Client,
    namespace: &str,
    policy: &RetryPolicy,
    names: &[&str],
) -> Result<()> {
    let api = Api::<RoleBinding>::namespaced(client.clone(), namespace);
    wait_for_objects::all_absent(policy, names, move |name| {
        let api = api.clone();
        async move { api.get_opt(&name).await }
    })
    .await?;
    Ok(())
}

/// Log the cluster-scoped RBAC state, for diagnosing a failed wait.
///
/// Listing failures are logged and swallowed: diagnostics must not mask the
/// error that brought us here.
pub async fn dump_cluster_rbac(client: &Client) {
    let cluster_roles = Api::<ClusterRole>::all(client.clone());
    match cluster_roles.list(&ListParams::default()).await {
        Ok(list) => {
            let names: Vec<_> = list
                .items
                .iter()
                .filter_map(|item| item.metadata.name.clone())
                .collect();
            info!(message = "Cluster roles currently present.", ?names);
        }
        Err(error) => warn!(message = "Failed to list cluster roles.", %error),
    }

    let cluster_role_bindings = Api::<ClusterRoleBinding>::all(client.clone());
    match cluster_role_bindings.list(&ListParams::default()).await {
        Ok(list) => {
            let names: Vec<_> = list
                .items
                .iter()
                .filter_map(|item| item.metadata.name.clone())
                .collect();
            info!(message = "Cluster role bindings currently present.", ?names);
        }
        Err(error) => warn!(message = "Failed to list cluster role bindings.", %error),
    }
}
