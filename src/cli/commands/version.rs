//! Version command implementation

use crate::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Also print build details
    #[arg(long)]
    pub detailed: bool,
}

/// Execute the version command
pub fn execute(args: VersionArgs) -> Result<()> {
    println!("{} {}", crate::PKG_NAME, crate::VERSION);

    if args.detailed {
        println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        println!("Rust edition: 2024");
        println!("Target: {}-{}", std::env::consts::ARCH, std::env::consts::OS);
        println!("Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    }

    Ok(())
}
