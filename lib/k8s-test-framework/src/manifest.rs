//! Manage declarative YAML fixtures.
//!
//! For fixtures that are most naturally expressed as a manifest, such as
//! custom resources, rather than built through the typed API.

use std::process::{Command, Stdio};

use super::{resource_file::ResourceFile, up_down, Result};

/// Declarative fixture configuration.
#[derive(Debug)]
pub struct Config {
    manifest_file: ResourceFile,
}

impl Config {
    pub fn from_resource_string(resource: &str) -> Result<Self> {
        let manifest_file = ResourceFile::new(resource)?;
        Ok(Self { manifest_file })
    }
}

/// Parameters required to build `kubectl` commands managing the fixture.
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
                up_down::CommandToBuild::Up => "apply",
                up_down::CommandToBuild::Down => "delete",
            })
            .arg("-f")
            .arg(self.config.manifest_file.path())
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
