use clap::Parser;
use eyre::Result;
use g2add_cli::{commands::AddCmd, setup_tracing_with_log_level};
use tracing::Level;

fn main() -> Result<()> {
    let cmd = AddCmd::parse();
    setup_tracing_with_log_level(Level::WARN);
    cmd.run()
}
