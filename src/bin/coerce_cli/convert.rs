//! Convert and match commands

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use typecoerce::{CoerceConfig, Coercer, Mode, TextStyle};

use super::input::{read_type, read_value};
use super::output::format_value;

#[derive(Parser, Debug)]
pub struct ConvertCmd {
    /// Target type, e.g. "dict[str, list[int]]" or "Optional[float]"
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub target: String,

    /// Read the input value from a JSON file ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "value")]
    pub json_file: Option<PathBuf>,

    /// Input value as JSON; anything that is not JSON is taken as text
    #[arg(long, value_name = "JSON")]
    pub value: Option<String>,

    /// Serialize text without spaces after separators
    #[arg(long)]
    pub compact: bool,

    /// Leave boxed values wrapped
    #[arg(long)]
    pub no_unwrap: bool,
}

impl ConvertCmd {
    pub fn execute(&self, mode: Mode, json_output: bool) -> Result<()> {
        let target = read_type(&self.target)?;
        let value = read_value(self.value.as_deref(), self.json_file.as_deref())?;

        let mut config = CoerceConfig::from_env();
        if self.compact {
            config = config.with_text_style(TextStyle::Compact);
        }
        if self.no_unwrap {
            config = config.with_unwrap_boxed(false);
        }
        debug!(target_type = %target, ?mode, ?config, "running conversion");

        let coercer = Coercer::new(config);
        let converted = match mode {
            Mode::Strict => coercer
                .type_match(&value, &target)
                .with_context(|| format!("Value does not match {}", target))?,
            Mode::Lenient => coercer.convert(&value, &target)?,
        };

        println!(
            "{}",
            format_value(&converted, &target, config.text_style, json_output)
        );
        Ok(())
    }
}
