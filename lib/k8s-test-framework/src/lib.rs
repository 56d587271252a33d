//! Kubernetes test framework for validating the live effects of
//! `rbac-operator` against a real cluster: bring fixtures up, wait for the
//! controller to converge, tear fixtures down, wait for cleanup.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

mod framework;
pub mod manifest;
pub mod namespace;
mod resource_file;
pub mod retry;
pub mod up_down;
mod util;
pub mod wait_for_objects;
pub mod wait_for_rollout;

pub use framework::Framework;

/// Error type used commonly across the framework.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type used commonly across the framework.
pub type Result<T = ()> = std::result::Result<T, Error>;

/// Connection parameters for the external tooling the framework shells out
/// to.
#[derive(Debug)]
pub struct Interface {
    /// The `kubectl` executable to invoke.
    pub kubectl_command: String,
}

impl Interface {
    /// Build an [`Interface`] from the environment, falling back to plain
    /// `kubectl` on the `PATH` when `KUBECTL` is unset.
    pub fn from_env() -> Self {
        Self {
            kubectl_command: std::env::var("KUBECTL").unwrap_or_else(|_| "kubectl".to_owned()),
        }
    }
}

static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Take the global scenario lock. All scenarios share one cluster and must
/// not interleave their fixture lifecycles.
pub fn lock() -> MutexGuard<'static, ()> {
    match LOCK.lock() {
        Ok(guard) => guard,
        // A panicked scenario leaves the cluster dirty, not the lock.
        Err(poisoned) => poisoned.into_inner(),
    }
}
