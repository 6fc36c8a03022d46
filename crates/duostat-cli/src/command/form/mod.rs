use crate::{command::form::app::FormApp, tui::Tui};

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FormArg {
    /// Pre-fill the first list field
    #[clap(long, value_name = "LIST")]
    first: Option<String>,
    /// Pre-fill the second list field
    #[clap(long, value_name = "LIST")]
    second: Option<String>,
}

pub(crate) fn run(arg: &FormArg) -> anyhow::Result<()> {
    let FormArg { first, second } = arg;

    let mut app = FormApp::new(
        first.clone().unwrap_or_default(),
        second.clone().unwrap_or_default(),
    );
    Tui::new().run(&mut app)
}
