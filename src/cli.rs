//! Pieces shared by the three binaries: global flags, argument parsing with
//! the toolkit's exit-code convention, completions and the error exit.

use crate::error::Error;
use crate::utils::exit_codes;
use clap::{Args, CommandFactory, Parser};
use clap_complete::{Shell, generate};
use colored::*;

/// Flags every binary accepts
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Parse the command line, exiting 1 on usage errors and 0 for help/version
pub fn parse<P: Parser>() -> P {
    P::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() {
            exit_codes::FAILURE
        } else {
            exit_codes::SUCCESS
        };
        let _ = err.print();
        std::process::exit(code)
    })
}

/// Write shell completions for `C` to stdout
pub fn print_completions<C: CommandFactory>(shell: Shell, bin_name: &str) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

/// Print the error chain and terminate with the failure exit code
pub fn exit_with_error(err: &anyhow::Error) -> ! {
    eprintln!("{}", format!("Error: {err:#}").red());
    std::process::exit(exit_codes::FAILURE)
}

/// Like [`exit_with_error`], followed by the usage of sub-command `name`
/// when the error is a missing argument
pub fn exit_with_usage_error<C: CommandFactory>(err: &anyhow::Error, name: &str) -> ! {
    eprintln!("{}", format!("Error: {err:#}").red());
    if let Some(Error::MissingArgument { .. }) = err.downcast_ref::<Error>()
        && let Some(usage) = subcommand_usage::<C>(name)
    {
        eprintln!();
        eprintln!("{usage}");
    }
    std::process::exit(exit_codes::FAILURE)
}

/// Usage line of one sub-command of `C`, qualified with the binary name
pub fn subcommand_usage<C: CommandFactory>(name: &str) -> Option<String> {
    let mut cmd = C::command();
    cmd.build();
    let sub = cmd.find_subcommand_mut(name)?;
    Some(sub.render_usage().to_string())
}
