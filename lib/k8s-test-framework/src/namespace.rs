//! Manage test namespaces.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use super::{resource_file::ResourceFile, up_down, Result};

/// Build a typed `Namespace`, optionally carrying the labels the controller
/// under test selects namespaces on.
pub fn make_namespace(name: String, labels: Option<BTreeMap<String, String>>) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name),
            labels,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Namespace fixture configuration.
#[derive(Debug)]
pub struct Config {
    namespace_resource_file: ResourceFile,
}

impl Config {
    pub fn from_namespace(namespace: &Namespace) -> Result<Self> {
        Self::from_resource_string(serde_json::to_string(namespace)?.as_str())
    }

    pub fn from_resource_string(resource: &str) -> Result<Self> {
        let namespace_resource_file = ResourceFile::new(resource)?;
        Ok(Self {
            namespace_resource_file,
        })
    }
}

/// Parameters required to build `kubectl` commands managing the namespace.
#[derive(Debug)]
pub struct CommandBuilder {
    kubectl_command: String,
    config: Config,
}

impl up_down::CommandBuilder for CommandBuilder {
    fn build(&self, command_to_build: up_down::CommandToBuild) -> Command {
        let mut command = Command::new(&self.kubectl_command);
        command
            .arg(match command_to_build {
                // `apply` keeps turnup idempotent when the namespace is
                // already provisioned.
                up_down::CommandToBuild::Up => "apply",
                up_down::CommandToBuild::Down => "delete",
            })
            .arg("-f")
            .arg(self.config.namespace_resource_file.path())
            .stdin(Stdio::null());
        command
    }
}

pub fn manager(kubectl_command: &str, config: Config) -> up_down::Manager<CommandBuilder> {
    up_down::Manager::new(CommandBuilder {
        kubectl_command: kubectl_command.to_owned(),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_carries_labels() {
        let namespace = make_namespace(
            "org-test".to_owned(),
            Some(BTreeMap::from([(
                "example.io/organization".to_owned(),
                "org-test".to_owned(),
            )])),
        );
        assert_eq!(namespace.metadata.name.as_deref(), Some("org-test"));
        let labels = namespace.metadata.labels.unwrap();
        assert_eq!(
            labels.get("example.io/organization").map(String::as_str),
            Some("org-test")
        );
    }
}
