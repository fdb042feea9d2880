use super::super::args::{Cli, Command};
use reflayout_conformance::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => super::run::run(args),
        Command::Format(args) => super::format::run(args),
        Command::Layouts => Ok(super::layouts::run()),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
