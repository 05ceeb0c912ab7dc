use crate::{
    adapter::{run_step, PlatformAdapter, Stage},
    CommandRunner, MacAddress, Result,
};

pub(crate) const IP: &str = "ip";

/// iproute2 `ip link` sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxAdapter;

impl PlatformAdapter for LinuxAdapter {
    fn disable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(runner, Stage::Disable, IP, &["link", "set", interface, "down"])
    }

    fn reassign(
        &self,
        runner: &dyn CommandRunner,
        interface: &str,
        mac: &MacAddress,
    ) -> Result<()> {
        let mac = mac.to_string();
        run_step(
            runner,
            Stage::Reassign,
            IP,
            &["link", "set", interface, "address", &mac],
        )
    }

    fn enable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(runner, Stage::Enable, IP, &["link", "set", interface, "up"])
    }

    fn report(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(runner, Stage::Report, IP, &["link", "show", interface])
    }
}
