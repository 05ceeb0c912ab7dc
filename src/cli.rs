use clap::Parser;

pub const USAGE: &str = "
Usage:
changemac -i <interface> -m <MAC>

Description:
Change the MAC address of an interface.

Options:
    -h, --help              Show this help message and exit
    -i, --interface         Interface name
    -m, --mac               Set a MAC address manually
    -r, --random            Set a random MAC address
    -V, --version           Print version and exit

Examples:
changemac -i wlan0 -m 00:11:22:33:44:55
changemac -i \"Wireless Network Connection\" -r
";

// Every flag is optional here. Combinations are checked by `dispatch` so
// each mistake gets its own message.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "changemac",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    override_usage = "changemac -i <interface> -m <MAC>"
)]
pub struct Args {
    #[arg(short, long)]
    pub help: bool,

    #[arg(short, long)]
    pub interface: Option<String>,

    #[arg(short, long)]
    pub mac: Option<String>,

    #[arg(short, long)]
    pub random: bool,
}

impl Args {
    /// True when nothing at all was passed on the command line.
    pub fn is_empty(&self) -> bool {
        self == &Args::default()
    }
}
