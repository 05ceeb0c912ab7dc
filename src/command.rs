use std::{
    fmt, io,
    process::{Command, ExitStatus, Stdio},
};

use log::debug;

/// What happens to a child's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Shown to the user.
    Inherit,
    /// Discarded.
    Suppress,
    /// Collected into [`CommandOutput`], never shown.
    Capture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn from_status(status: ExitStatus) -> Self {
        CommandOutput {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "exit code {code}")?,
            None => f.write_str("terminated by signal")?,
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            write!(f, ": {stderr}")?;
        }
        Ok(())
    }
}

/// Runs external programs to completion.
///
/// Everything that touches the host's network configuration goes through
/// this trait, so tests can swap in a recorder.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], output: Output) -> io::Result<CommandOutput>;
}

/// Spawns real processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], output: Output) -> io::Result<CommandOutput> {
        debug!("running {}", display_command(program, args));
        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());

        let result = match output {
            Output::Inherit => CommandOutput::from_status(command.status()?),
            Output::Suppress => CommandOutput::from_status(
                command
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()?,
            ),
            Output::Capture => {
                let out = command.output()?;
                CommandOutput {
                    exit_code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                }
            }
        };
        debug!("{program} finished with {result}");
        Ok(result)
    }
}

/// Renders a command line the way a user would type it.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_owned();
    for arg in args {
        line.push(' ');
        if arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
