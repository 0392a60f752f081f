//! # pyinit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every external tool pyinit drives (`uv`, `git`, `pre-commit` through
//! `uv run`) is executed through this module. Output is captured rather than
//! shown, so a successful run stays quiet; when a checked command exits
//! non-zero its captured streams are logged and carried in the returned error.
//!
//! ## Architecture
//!
//! - **`CommandRunner`**: The seam between pyinit and the operating system.
//!   `SystemRunner` spawns real processes with `std::process::Command`; tests
//!   substitute a recording runner.
//! - **`run_command`**: Runs one command through a runner and, when `check` is
//!   set, turns a non-zero exit into `PyinitError::ExternalCommand`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{run_command, SystemRunner};
//!
//! let output = run_command(&SystemRunner, "git", &["init"], project_dir, true)?;
//! ```
//!
use crate::core::error::{PyinitError, Result};
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes an external program to completion and captures its output.
pub trait CommandRunner {
    /// Runs `program` with `args` in `cwd`.
    ///
    /// Implementations must not inspect the exit status; only failure to
    /// start or wait for the process is an error.
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<CommandOutput>;
}

/// Runs commands as child processes of pyinit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .with_context(|| {
                format!(
                    "Failed to execute command '{}' in {}. Is it installed and in PATH?",
                    program,
                    cwd.display()
                )
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs `program args...` in `cwd` through `runner`.
///
/// Arguments may be strings or paths; they are passed to the process as-is.
/// With `check` set, a non-zero exit logs the captured stdout and stderr and
/// returns `PyinitError::ExternalCommand`, whose message repeats them.
/// Without it the output is returned whatever the exit status.
pub fn run_command<R, S>(
    runner: &R,
    program: &str,
    args: &[S],
    cwd: &Path,
    check: bool,
) -> Result<CommandOutput>
where
    R: CommandRunner + ?Sized,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args.iter().map(|a| a.as_ref().to_os_string()).collect();
    let cmd_line = display_command(program, &args);
    debug!("Running `{}` in {}", cmd_line, cwd.display());

    let output = runner.run(program, &args, cwd)?;
    debug!("`{}` exited with {:?}", cmd_line, output.code);

    if check && !output.success() {
        if !output.stdout.trim().is_empty() {
            error!("Standard output: {}", output.stdout.trim_end());
        }
        if !output.stderr.trim().is_empty() {
            error!("Standard error: {}", output.stderr.trim_end());
        }
        let status = output
            .code
            .map_or_else(|| "terminated by signal".to_string(), |c| c.to_string());
        return Err(PyinitError::ExternalCommand {
            cmd: cmd_line,
            status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
        .into());
    }

    Ok(output)
}

fn display_command(program: &str, args: &[OsString]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|a| a.to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines so tests can inspect them.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Returns a fixed output and remembers what it was asked to run.
    struct CannedRunner {
        output: CommandOutput,
        calls: RefCell<Vec<(String, Vec<OsString>, PathBuf)>>,
    }

    impl CannedRunner {
        fn new(code: i32, stdout: &str, stderr: &str) -> Self {
            Self {
                output: CommandOutput {
                    code: Some(code),
                    stdout: stdout.into(),
                    stderr: stderr.into(),
                },
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for CannedRunner {
        fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec(), cwd.to_path_buf()));
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_run_command_passes_args_and_cwd() -> Result<()> {
        let runner = CannedRunner::new(0, "ok", "");
        let cwd = Path::new("/tmp/project");
        let file = PathBuf::from("/tmp/project/file.txt");
        let output = run_command(&runner, "tool", &[OsStr::new("add"), file.as_os_str()], cwd, true)?;

        assert_eq!(output.stdout, "ok");
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "tool");
        assert_eq!(
            calls[0].1,
            vec![OsString::from("add"), OsString::from("/tmp/project/file.txt")]
        );
        assert_eq!(calls[0].2, cwd);
        Ok(())
    }

    #[test]
    fn test_run_command_checked_failure_surfaces_output() {
        let runner = CannedRunner::new(2, "partial", "boom");
        let err = run_command(&runner, "uv", &["add", "ruff"], Path::new("/tmp"), true).unwrap_err();

        match err.downcast_ref::<PyinitError>() {
            Some(PyinitError::ExternalCommand {
                cmd,
                status,
                stdout,
                stderr,
            }) => {
                assert_eq!(cmd, "uv add ruff");
                assert_eq!(status, "2");
                assert_eq!(stdout, "partial");
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    /// Captured streams of a failed command must be visible at the `error` level.
    #[test]
    fn test_run_command_checked_failure_logs_streams_at_error_level() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::ERROR)
            .with_ansi(false)
            .finish();

        let runner = CannedRunner::new(1, "resolving dependencies", "No solution found");
        let result = tracing::subscriber::with_default(subscriber, || {
            run_command(&runner, "uv", &["add", "ruff"], Path::new("/tmp"), true)
        });

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("ERROR"), "logs were: {output}");
        assert!(output.contains("Standard output: resolving dependencies"));
        assert!(output.contains("Standard error: No solution found"));
    }

    #[test]
    fn test_run_command_success_logs_nothing_at_error_level() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::ERROR)
            .with_ansi(false)
            .finish();

        let runner = CannedRunner::new(0, "done", "");
        tracing::subscriber::with_default(subscriber, || {
            run_command(&runner, "git", &["init"], Path::new("/tmp"), true)
        })
        .unwrap();

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn test_run_command_unchecked_failure_returns_output() -> Result<()> {
        let runner = CannedRunner::new(1, "", "warning");
        let output = run_command(&runner, "git", &["status"], Path::new("/tmp"), false)?;
        assert!(!output.success());
        assert_eq!(output.stderr, "warning");
        Ok(())
    }

    #[test]
    fn test_signal_termination_is_not_success() {
        let output = CommandOutput {
            code: None,
            ..Default::default()
        };
        assert!(!output.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let output = run_command(&SystemRunner, "sh", &["-c", "echo hello; exit 3"], dir.path(), false)?;
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hello");

        let err = run_command(&SystemRunner, "sh", &["-c", "exit 3"], dir.path(), true).unwrap_err();
        assert!(err.to_string().contains("Status: 3"));
        Ok(())
    }

    #[test]
    fn test_system_runner_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_command(
            &SystemRunner,
            "pyinit-definitely-not-installed",
            &["--version"],
            dir.path(),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Is it installed and in PATH?"));
    }
}
