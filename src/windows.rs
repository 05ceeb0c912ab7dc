use log::debug;

use crate::{
    adapter::{run_step, PlatformAdapter, Stage},
    CommandRunner, MacAddress, Result,
};

pub(crate) const NETSH: &str = "netsh";
const GETMAC: &str = "getmac";

/// `netsh interface` sequence. The address is set and the interface
/// re-enabled by one call, so [`PlatformAdapter::enable`] does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsAdapter;

impl PlatformAdapter for WindowsAdapter {
    fn disable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(
            runner,
            Stage::Disable,
            NETSH,
            &["interface", "set", "interface", interface, "admin=disable"],
        )
    }

    fn reassign(
        &self,
        runner: &dyn CommandRunner,
        interface: &str,
        mac: &MacAddress,
    ) -> Result<()> {
        let ethernet = format!("ethernet={mac}");
        run_step(
            runner,
            Stage::Reassign,
            NETSH,
            &[
                "interface",
                "set",
                "interface",
                interface,
                &ethernet,
                "admin=enable",
            ],
        )
    }

    fn enable(&self, _runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        debug!("{interface} was re-enabled together with the new address");
        Ok(())
    }

    fn report(&self, runner: &dyn CommandRunner, _interface: &str) -> Result<()> {
        run_step(runner, Stage::Report, GETMAC, &["/v"])
    }
}
