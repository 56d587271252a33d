//! Wait for a resource rollout to complete.

use std::process::Stdio;

use tokio::process::Command;

use super::Result;
use crate::util::run_command;

/// Wait for a rollout of a `resource` within a `namespace` to complete via
/// the specified `kubectl_command`.
/// Use `extra` to pass additional arguments to `kubectl`, such as
/// `--timeout`.
pub async fn run<'a>(
    kubectl_command: &str,
    namespace: &str,
    resource: &str,
    extra: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut command = Command::new(kubectl_command);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    command.arg("rollout").arg("status");
    command.arg("-n").arg(namespace);
    command.arg(resource);
    command.args(extra);

    run_command(command).await?;
    Ok(())
}
