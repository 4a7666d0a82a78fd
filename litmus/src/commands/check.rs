use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use litmus_manifest::LitmusToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to litmus.toml (defaults to ./litmus.toml)
    #[arg(short, long, default_value = "litmus.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let litmus_toml = LitmusToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(litmus_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
