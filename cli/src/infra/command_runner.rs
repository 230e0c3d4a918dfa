//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. Commands run one at
//! a time on the caller's task; there is no timeout, so a hung child blocks
//! until it exits.

use std::io::Write;
use std::process::{ExitStatus, Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, ChildStdout, Command};

use crate::application::ports::{CommandRunner, LineObserver};
use crate::domain::{ExitCode, TaskError};

/// Characters that make a command string need `sh -c`.
const SHELL_META: &[char] = &[
    '*', '?', '{', '}', '[', ']', '<', '>', '(', ')', '~', '&', '|', '\\', '$', ';', '\'', '`',
    '"', '\n', '#',
];

/// Build the process for a command string.
///
/// Plain commands are split into argv and spawned directly, so a missing
/// executable fails to launch instead of becoming a shell exit status 127.
/// Anything with shell syntax (pipes, redirection, quoting, a leading
/// `VAR=value` assignment) runs under `sh -c`.
fn build_command(command: &str) -> Command {
    if !command.contains(SHELL_META)
        && let Ok(argv) = shell_words::split(command)
        && let Some((program, args)) = argv.split_first()
        && !program.contains('=')
    {
        let mut cmd = Command::new(program);
        cmd.args(args);
        return cmd;
    }
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn launch_error(command: &str, source: std::io::Error) -> anyhow::Error {
    TaskError::Launch {
        command: command.to_string(),
        source,
    }
    .into()
}

/// Plain exit code of a finished process. Signal deaths map to `128 + signal`.
#[must_use]
pub fn exit_code(status: ExitStatus) -> ExitCode {
    if let Some(code) = status.code() {
        return ExitCode(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitCode(128 + signal);
        }
    }
    ExitCode(-1)
}

/// Write one raw line to the sink, then hand its text to the observer.
fn forward(
    line: &[u8],
    sink: &mut dyn Write,
    observer: Option<&mut (dyn FnMut(&str) + '_)>,
) -> Result<()> {
    sink.write_all(line).context("forwarding command output")?;
    sink.flush().context("flushing command output")?;
    if let Some(observe) = observer {
        let text = String::from_utf8_lossy(line);
        observe(text.trim_end_matches(['\n', '\r']));
    }
    Ok(())
}

/// Forward both pipes line by line until each reaches end-of-stream.
async fn pump(
    mut stdout: BufReader<ChildStdout>,
    mut stderr: BufReader<ChildStderr>,
    sink: &mut dyn Write,
    mut observer: Option<&mut (dyn FnMut(&str) + '_)>,
) -> Result<()> {
    // Partial lines stay in these buffers across select! iterations;
    // read_until appends and can simply be called again.
    let mut out_line = Vec::new();
    let mut err_line = Vec::new();
    let mut out_open = true;
    let mut err_open = true;

    while out_open || err_open {
        tokio::select! {
            read = stdout.read_until(b'\n', &mut out_line), if out_open => {
                if read.context("reading command stdout")? == 0 {
                    out_open = false;
                } else {
                    forward(&out_line, sink, observer.as_deref_mut())?;
                    out_line.clear();
                }
            }
            read = stderr.read_until(b'\n', &mut err_line), if err_open => {
                if read.context("reading command stderr")? == 0 {
                    err_open = false;
                } else {
                    forward(&err_line, sink, observer.as_deref_mut())?;
                    err_line.clear();
                }
            }
        }
    }
    Ok(())
}

/// Production `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &str) -> Result<Output> {
        tracing::debug!(command, "running (captured)");
        let child = build_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| launch_error(command, e))?;
        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for `{command}`"))?;
        tracing::debug!(command, code = exit_code(output.status).0, "finished");
        Ok(output)
    }

    async fn run_status(&self, command: &str) -> Result<ExitCode> {
        tracing::debug!(command, "running");
        let mut child = build_command(command)
            .spawn()
            .map_err(|e| launch_error(command, e))?;
        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for `{command}`"))?;
        let code = exit_code(status);
        tracing::debug!(command, code = code.0, "finished");
        Ok(code)
    }

    async fn run_streamed(
        &self,
        command: &str,
        sink: &mut dyn Write,
        mut observer: Option<LineObserver<'_>>,
    ) -> Result<ExitCode> {
        tracing::debug!(command, "running (streamed)");
        let mut child = build_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| launch_error(command, e))?;

        let stdout = child.stdout.take().context("child stdout not captured")?;
        let stderr = child.stderr.take().context("child stderr not captured")?;

        if let Err(err) = pump(
            BufReader::new(stdout),
            BufReader::new(stderr),
            sink,
            observer.as_deref_mut(),
        )
        .await
        {
            // The child is reaped before the error surfaces.
            if let Err(kill_err) = child.start_kill() {
                tracing::debug!(%kill_err, "child already exited");
            }
            if let Err(wait_err) = child.wait().await {
                tracing::debug!(%wait_err, "reaping child failed");
            }
            return Err(err);
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for `{command}`"))?;
        let code = exit_code(status);
        tracing::debug!(command, code = code.0, "finished");
        Ok(code)
    }
}
