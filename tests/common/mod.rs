use std::{cell::RefCell, io};

use changemac_lib::{display_command, CommandOutput, CommandRunner, Output};

/// One recorded call to [`FakeRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub output: Output,
}

/// Records every command and answers from a list of rules.
///
/// A rule matches when the rendered command line starts with its prefix; the
/// first match wins. Unmatched commands succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    rules: Vec<(String, Response)>,
    calls: RefCell<Vec<Call>>,
}

#[derive(Clone)]
pub enum Response {
    Exit(i32, String),
    NotFound,
}

#[allow(dead_code)]
impl FakeRunner {
    pub fn new() -> Self {
        FakeRunner::default()
    }

    pub fn fail(mut self, prefix: &str, code: i32) -> Self {
        self.rules
            .push((prefix.to_owned(), Response::Exit(code, String::new())));
        self
    }

    pub fn stdout(mut self, prefix: &str, stdout: &str) -> Self {
        self.rules
            .push((prefix.to_owned(), Response::Exit(0, stdout.to_owned())));
        self
    }

    pub fn missing(mut self, prefix: &str) -> Self {
        self.rules.push((prefix.to_owned(), Response::NotFound));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    /// Commands whose output was shown to the user, i.e. the change sequence.
    pub fn visible_commands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.output == Output::Inherit)
            .map(|c| c.command)
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], output: Output) -> io::Result<CommandOutput> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(Call {
            command: command.clone(),
            output,
        });

        let response = self
            .rules
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or(Response::Exit(0, String::new()));

        match response {
            Response::Exit(code, stdout) => Ok(CommandOutput {
                exit_code: Some(code),
                stdout,
                stderr: String::new(),
            }),
            Response::NotFound => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: not found"),
            )),
        }
    }
}

#[allow(dead_code)]
pub const MACOS_HARDWARE_PORTS: &str = "\
en0 (Hardware Port: Wi-Fi, Ethernet Address: a4:83:e7:00:00:01)
en1 (Hardware Port: Thunderbolt Ethernet, Ethernet Address: a4:83:e7:00:00:02)
";
