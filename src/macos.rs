use crate::{
    adapter::{run_step, PlatformAdapter, Stage},
    CommandRunner, MacAddress, Result,
};

pub(crate) const NETWORKSETUP: &str = "networksetup";

/// Private wireless utility used to dissociate Wi-Fi interfaces.
pub const AIRPORT: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

/// `networksetup` sequence.
///
/// Powering a Wi-Fi port off with `-setairportpower` can leave `ifconfig`
/// looping on "ioctl (SIOCAIFADDR): Can't assign requested address", so Wi-Fi
/// interfaces are taken down with `airport <if> -z` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacOsAdapter {
    Ethernet,
    WiFi,
}

impl PlatformAdapter for MacOsAdapter {
    fn disable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        match self {
            MacOsAdapter::Ethernet => run_step(
                runner,
                Stage::Disable,
                NETWORKSETUP,
                &["-setairportpower", interface, "off"],
            ),
            MacOsAdapter::WiFi => run_step(runner, Stage::Disable, AIRPORT, &[interface, "-z"]),
        }
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
            NETWORKSETUP,
            &["-setmacaddress", interface, &mac],
        )
    }

    fn enable(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(
            runner,
            Stage::Enable,
            NETWORKSETUP,
            &["-setairportpower", interface, "on"],
        )
    }

    fn report(&self, runner: &dyn CommandRunner, interface: &str) -> Result<()> {
        run_step(runner, Stage::Report, NETWORKSETUP, &["-getinfo", interface])
    }
}
