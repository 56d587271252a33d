//! Wait until a set of named cluster objects exists, or is gone.
//!
//! The lookup is caller-supplied so the same helpers cover cluster-scoped
//! and namespace-scoped kinds. A lookup resolves to `Some` when the object
//! exists, `None` when the cluster reports it does not, and a transport
//! error otherwise; all three shapes are retried until the policy budget
//! runs out. The full name set is re-checked on every attempt, so success
//! means all names were satisfied within a single probe pass.

use std::future::Future;

use kube::Resource;
use snafu::{ensure, ResultExt, Snafu};
use tracing::info;

use crate::retry::{Exhausted, RetryPolicy};

/// Why a single probe pass over the name set failed.
#[derive(Debug, Snafu)]
pub enum LookupFailure {
    /// An object that is expected to exist does not, yet.
    #[snafu(display("{kind} {name:?} does not exist"))]
    Missing {
        /// Object kind.
        kind: String,
        /// Object name.
        name: String,
    },
    /// An object that is expected to be gone still resolves.
    #[snafu(display("{kind} {name:?} still exists"))]
    StillExists {
        /// Object kind.
        kind: String,
        /// Object name.
        name: String,
    },
    /// The cluster could not answer the lookup at all.
    #[snafu(display("lookup of {kind} {name:?} failed: {source}"))]
    Lookup {
        /// Object kind.
        kind: String,
        /// Object name.
        name: String,
        /// The underlying client error.
        source: kube::Error,
    },
}

/// Wait until every object in `names` exists.
pub async fn all_present<K, L, Fut>(
    policy: &RetryPolicy,
    names: &[&str],
    lookup: L,
) -> Result<(), Exhausted<LookupFailure>>
where
    K: Resource<DynamicType = ()>,
    L: Fn(String) -> Fut,
    Fut: Future<Output = kube::Result<Option<K>>>,
{
    let kind = K::kind(&()).into_owned();
    policy
        .run(&format!("{kind} objects present"), || async {
            for name in names {
                let object = lookup((*name).to_owned()).await.context(LookupSnafu {
                    kind: kind.as_str(),
                    name: *name,
                })?;
                ensure!(
                    object.is_some(),
                    MissingSnafu {
                        kind: kind.as_str(),
                        name: *name,
                    }
                );
            }
            Ok(())
        })
        .await?;
    info!(message = "All objects present.", kind = kind.as_str(), ?names);
    Ok(())
}

/// Wait until every object in `names` is gone.
pub async fn all_absent<K, L, Fut>(
    policy: &RetryPolicy,
    names: &[&str],
    lookup: L,
) -> Result<(), Exhausted<LookupFailure>>
where
    K: Resource<DynamicType = ()>,
    L: Fn(String) -> Fut,
    Fut: Future<Output = kube::Result<Option<K>>>,
{
    let kind = K::kind(&()).into_owned();
    policy
        .run(&format!("{kind} objects absent"), || async {
            for name in names {
                let object = lookup((*name).to_owned()).await.context(LookupSnafu {
                    kind: kind.as_str(),
                    name: *name,
                })?;
                ensure!(
                    object.is_none(),
                    StillExistsSnafu {
                        kind: kind.as_str(),
                        name: *name,
                    }
                );
            }
            Ok(())
        })
        .await?;
    info!(message = "All objects absent.", kind = kind.as_str(), ?names);
    Ok(())
}
