//! Up/down lifecycle management for cluster fixtures.

use std::process::Command;

use crate::util::{run_command, run_command_blocking};
use crate::Result;

/// Which direction a fixture is being driven in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandToBuild {
    /// Bring the fixture up.
    Up,
    /// Tear the fixture down.
    Down,
}

/// Builds the concrete command realizing a turnup or turndown.
pub trait CommandBuilder {
    fn build(&self, command_to_build: CommandToBuild) -> Command;
}

/// Drives a fixture up and down on the cluster.
///
/// A fixture that was brought up and not explicitly torn down is torn down
/// on drop, so a failing scenario still cleans the cluster behind itself.
#[derive(Debug)]
pub struct Manager<B>
where
    B: CommandBuilder,
{
    command_builder: B,
    needs_drop: bool,
}

impl<B> Manager<B>
where
    B: CommandBuilder,
{
    pub fn new(command_builder: B) -> Self {
        Self {
            command_builder,
            needs_drop: false,
        }
    }

    /// Bring up the fixture.
    pub async fn up(&mut self) -> Result<()> {
        self.needs_drop = true;
        self.exec(CommandToBuild::Up).await
    }

    /// Tear down the fixture.
    pub async fn down(&mut self) -> Result<()> {
        self.needs_drop = false;
        self.exec(CommandToBuild::Down).await
    }

    /// Bring up the fixture, blocking the thread.
    pub fn up_blocking(&mut self) -> Result<()> {
        self.needs_drop = true;
        self.exec_blocking(CommandToBuild::Up)
    }

    /// Tear down the fixture, blocking the thread.
    pub fn down_blocking(&mut self) -> Result<()> {
        self.needs_drop = false;
        self.exec_blocking(CommandToBuild::Down)
    }

    async fn exec(&self, command_to_build: CommandToBuild) -> Result<()> {
        let command = self.command_builder.build(command_to_build);
        run_command(tokio::process::Command::from(command)).await
    }

    fn exec_blocking(&self, command_to_build: CommandToBuild) -> Result<()> {
        let command = self.command_builder.build(command_to_build);
        run_command_blocking(command)
    }
}

impl<B> Drop for Manager<B>
where
    B: CommandBuilder,
{
    fn drop(&mut self) {
        if self.needs_drop {
            self.down_blocking().expect("turndown failed");
        }
    }
}
