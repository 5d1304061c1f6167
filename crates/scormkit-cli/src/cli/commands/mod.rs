pub mod export;

use crate::cli::args::{Cli, Command};
use anyhow::Result;

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Export(args) => export::run(args),
    }
}
