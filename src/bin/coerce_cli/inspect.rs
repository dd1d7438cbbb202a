//! Inspect command - show how a descriptor decomposes

use anyhow::Result;
use clap::Parser;

use super::input::read_type;
use super::output::format_inspection;

#[derive(Parser, Debug)]
pub struct InspectCmd {
    /// Type descriptor to inspect
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub target: String,
}

impl InspectCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let target = read_type(&self.target)?;
        let (origin, args) = typecoerce::inspect(&target);
        println!("{}", format_inspection(&target, origin, args, json_output));
        Ok(())
    }
}
