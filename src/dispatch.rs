use log::{debug, info};

use crate::{
    adapter::{change_mac, ChangeReport, PlatformAdapter},
    mac::{generate_random_mac, MacAddress},
    probe::{interface_exists, is_wifi_macos},
    Args, ChangeMacError, CommandRunner, Context, LinuxAdapter, MacOsAdapter, Platform, Result,
    WindowsAdapter,
};

#[derive(Debug)]
pub enum Outcome {
    /// Help was requested or no arguments were given.
    Usage,
    Changed(ChangeReport),
}

/// Validates `args` and runs the change sequence for the context's platform.
///
/// Nothing that alters the interface runs until every argument and
/// precondition has been checked.
pub fn dispatch(args: &Args, ctx: &Context, runner: &dyn CommandRunner) -> Result<Outcome> {
    if args.help || args.is_empty() {
        return Ok(Outcome::Usage);
    }

    let interface = match args.interface.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ChangeMacError::MissingInterface),
    };
    let requested = match (&args.mac, args.random) {
        (None, false) => return Err(ChangeMacError::MissingMac),
        (Some(_), true) => return Err(ChangeMacError::ConflictingMacSource),
        (Some(mac), false) => Some(mac.parse::<MacAddress>()?),
        (None, true) => None,
    };

    if let Platform::Other(name) = &ctx.platform {
        return Err(ChangeMacError::UnsupportedPlatform(name.clone()));
    }
    if !interface_exists(runner, interface, &ctx.platform)? {
        return Err(ChangeMacError::UnknownInterface(interface.to_owned()));
    }

    let mac = match requested {
        Some(mac) => mac,
        None => {
            let mac = generate_random_mac();
            info!("generated random address {mac}");
            mac
        }
    };

    if !ctx.privileged {
        return Err(ChangeMacError::NotPrivileged(ctx.platform.privileged_role()));
    }

    let adapter = select_adapter(runner, interface, &ctx.platform)?;
    Ok(Outcome::Changed(change_mac(
        adapter.as_ref(),
        runner,
        interface,
        &mac,
    )))
}

fn select_adapter(
    runner: &dyn CommandRunner,
    interface: &str,
    platform: &Platform,
) -> Result<Box<dyn PlatformAdapter>> {
    let adapter: Box<dyn PlatformAdapter> = match platform {
        Platform::Linux => Box::new(LinuxAdapter),
        Platform::Windows => Box::new(WindowsAdapter),
        Platform::MacOs if is_wifi_macos(runner, interface) => {
            debug!("{interface} is a Wi-Fi port");
            Box::new(MacOsAdapter::WiFi)
        }
        Platform::MacOs => Box::new(MacOsAdapter::Ethernet),
        Platform::Other(name) => return Err(ChangeMacError::UnsupportedPlatform(name.clone())),
    };
    Ok(adapter)
}
