use log::{debug, warn};

use crate::{
    command::{CommandRunner, Output},
    linux::IP,
    macos::NETWORKSETUP,
    windows::NETSH,
    ChangeMacError, Platform, Result,
};

/// Checks that the platform's network tool is installed.
pub fn require_tool(runner: &dyn CommandRunner, platform: &Platform) -> Result<()> {
    let (lookup, tool) = match platform {
        Platform::Linux => ("which", IP),
        Platform::Windows => ("where", NETSH),
        Platform::MacOs => ("which", NETWORKSETUP),
        Platform::Other(name) => return Err(ChangeMacError::UnsupportedPlatform(name.clone())),
    };
    match runner.run(lookup, &[tool], Output::Suppress) {
        Ok(out) if out.success() => Ok(()),
        Ok(out) => {
            debug!("{lookup} {tool}: {out}");
            Err(ChangeMacError::MissingTool(tool.to_owned()))
        }
        Err(e) => {
            debug!("could not run {lookup}: {e}");
            Err(ChangeMacError::MissingTool(tool.to_owned()))
        }
    }
}

/// Reports whether `interface` exists, after checking the query tool is there.
pub fn interface_exists(
    runner: &dyn CommandRunner,
    interface: &str,
    platform: &Platform,
) -> Result<bool> {
    require_tool(runner, platform)?;
    let exists = match platform {
        Platform::Linux => succeeds(runner, IP, &["link", "show", interface]),
        Platform::Windows => succeeds(
            runner,
            NETSH,
            &["interface", "show", "interface", interface],
        ),
        Platform::MacOs => {
            let needle = format!("{interface} (Hardware Port: ");
            hardware_ports(runner)
                .lines()
                .any(|line| line.contains(&needle))
        }
        Platform::Other(name) => return Err(ChangeMacError::UnsupportedPlatform(name.clone())),
    };
    Ok(exists)
}

/// Reports whether a macOS interface is a Wi-Fi port.
pub fn is_wifi_macos(runner: &dyn CommandRunner, interface: &str) -> bool {
    hardware_ports(runner)
        .lines()
        .any(|line| line.starts_with(interface) && line.contains("Wi-Fi"))
}

fn succeeds(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> bool {
    match runner.run(program, args, Output::Suppress) {
        Ok(out) => out.success(),
        Err(e) => {
            warn!("could not run {program}: {e}");
            false
        }
    }
}

fn hardware_ports(runner: &dyn CommandRunner) -> String {
    match runner.run(NETWORKSETUP, &["-listallhardwareports"], Output::Capture) {
        Ok(out) => out.stdout,
        Err(e) => {
            warn!("could not list hardware ports: {e}");
            String::new()
        }
    }
}
