use std::fmt;

use log::{debug, error};

use crate::{
    command::{display_command, CommandRunner, Output},
    ChangeMacError, MacAddress, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Disable,
    Reassign,
    Enable,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Disable => "disable",
            Stage::Reassign => "reassign",
            Stage::Enable => "enable",
            Stage::Report => "report",
        })
    }
}

/// The down / set / up / show capability set of one platform.
///
/// Every method is a single external command. A failure is returned as
/// [`ChangeMacError::StepFailed`] and never stops [`change_mac`].
pub trait PlatformAdapter {
    fn disable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()>;
    fn reassign(&self, runner: &dyn CommandRunner, interface: &str, mac: &MacAddress)
        -> Result<()>;
    fn enable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()>;
    fn report(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()>;
}

/// Runs one step with the child's output shown to the user.
pub(crate) fn run_step(
    runner: &dyn CommandRunner,
    stage: Stage,
    program: &str,
    args: &[&str],
) -> Result<()> {
    let failed = |detail: String| ChangeMacError::StepFailed {
        stage,
        command: display_command(program, args),
        detail,
    };
    match runner.run(program, args, Output::Inherit) {
        Ok(out) if out.success() => Ok(()),
        Ok(out) => Err(failed(out.to_string())),
        Err(e) => Err(failed(e.to_string())),
    }
}

#[derive(Debug)]
pub struct StepOutcome {
    pub stage: Stage,
    pub result: Result<()>,
}

/// What happened during one [`change_mac`] run.
#[derive(Debug)]
pub struct ChangeReport {
    pub interface: String,
    pub mac: MacAddress,
    pub steps: Vec<StepOutcome>,
}

impl ChangeReport {
    pub fn failures(&self) -> impl Iterator<Item = &ChangeMacError> {
        self.steps.iter().filter_map(|s| s.result.as_ref().err())
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Drives an adapter through disable, reassign, enable and report.
///
/// Steps are independent: a failed step is logged and the next one still
/// runs, so the interface may be left down if reassigning fails halfway.
pub fn change_mac(
    adapter: &dyn PlatformAdapter,
    runner: &dyn CommandRunner,
    interface: &str,
    mac: &MacAddress,
) -> ChangeReport {
    println!("\nChanging MAC address of {interface} to {mac} ...");

    let mut steps = Vec::with_capacity(4);
    let mut record = |stage: Stage, result: Result<()>| {
        match &result {
            Ok(()) => debug!("{stage} step on {interface} succeeded"),
            Err(e) => error!("Some error occurred performing the task.\n{e}"),
        }
        steps.push(StepOutcome { stage, result });
    };

    record(Stage::Disable, adapter.disable(runner, interface));
    record(Stage::Reassign, adapter.reassign(runner, interface, mac));
    record(Stage::Enable, adapter.enable(runner, interface));
    println!("Done\n");
    record(Stage::Report, adapter.report(runner, interface));

    ChangeReport {
        interface: interface.to_owned(),
        mac: *mac,
        steps,
    }
}
