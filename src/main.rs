use clap::Parser;
use prompt_filter::Result;
use prompt_filter::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
