use clap::{Parser, Subcommand};

use self::{calc::CalcArg, form::FormArg};

mod calc;
mod form;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Interactive two-list statistics form
    Form(#[clap(flatten)] FormArg),
    /// Compute the statistics report once and print it
    Calc(#[clap(flatten)] CalcArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Form(FormArg::default())) {
        Mode::Form(arg) => form::run(&arg)?,
        Mode::Calc(arg) => calc::run(&arg)?,
    }
    Ok(())
}
