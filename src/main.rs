use anyhow::Result;
use changemac_lib::{dispatch, Args, Context, Outcome, SystemRunner, USAGE};
use clap::{error::ErrorKind, Parser};
use env_logger::Env;
use log::warn;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let ctx = Context::detect();
    match dispatch(&args, &ctx, &SystemRunner)? {
        Outcome::Usage => print!("{USAGE}"),
        Outcome::Changed(report) => {
            let failed = report.failures().count();
            if failed > 0 {
                warn!(
                    "{failed} of {} steps failed; {} may not have the address {}",
                    report.steps.len(),
                    report.interface,
                    report.mac
                );
            }
        }
    }
    Ok(())
}
