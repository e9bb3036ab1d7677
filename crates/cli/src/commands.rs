//! Subcommand definitions and their execution.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Subcommand};
use modelddl_codegen::ConverterRegistry;
use modelddl_ir::{ModelDescriptor, load_models};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate CREATE TABLE statements for every model in a schema
    Convert(ConvertCmd),

    /// Generate DROP TABLE IF EXISTS statements for every model in a schema
    Drop(DropCmd),

    /// List the registered driver identities
    Drivers,
}

/// Arguments shared by `convert` and `drop`
#[derive(ClapArgs, Debug)]
pub struct TargetArgs {
    /// Schema file, or a directory of *.json schema files
    pub schema: PathBuf,

    /// Driver identity (overrides config and MODELDDL_DRIVER)
    #[arg(short, long)]
    pub driver: Option<String>,

    /// Write statements to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ConvertCmd {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Prefix each CREATE TABLE with a `# Create table` comment
    #[arg(long)]
    pub comments: bool,

    /// Emit each CREATE TABLE on a single line
    #[arg(long)]
    pub one_line: bool,

    /// Append CREATE INDEX statements for relation key columns
    #[arg(long)]
    pub auto_indexes: bool,
}

#[derive(ClapArgs, Debug)]
pub struct DropCmd {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl Command {
    pub fn run(self, config: CliConfig) -> Result<()> {
        let registry = ConverterRegistry::with_defaults();
        match self {
            Command::Convert(cmd) => cmd.execute(&registry, config),
            Command::Drop(cmd) => cmd.execute(&registry, config),
            Command::Drivers => {
                for driver in registry.drivers() {
                    println!("{driver}");
                }
                Ok(())
            }
        }
    }
}

impl ConvertCmd {
    /// Layer the flags over `config`; a flag can only switch an option on
    pub fn apply(&self, config: &mut CliConfig) {
        self.target.apply(config);
        config.translator.comments |= self.comments;
        config.translator.one_line |= self.one_line;
        config.translator.auto_indexes |= self.auto_indexes;
    }

    pub fn execute(self, registry: &ConverterRegistry, mut config: CliConfig) -> Result<()> {
        self.apply(&mut config);
        let translator = registry.translator(&config.driver, config.translator)?;
        let models = read_schema(&self.target.schema)?;

        let statements = translator
            .convert(&models)
            .with_context(|| format!("Failed to convert {}", self.target.schema.display()))?;

        output::write_statements(&statements, self.target.output.as_deref())?;
        output::report("Converted", models.len(), statements.len(), self.target.output.as_deref());
        Ok(())
    }
}

impl DropCmd {
    pub fn execute(self, registry: &ConverterRegistry, mut config: CliConfig) -> Result<()> {
        self.target.apply(&mut config);
        let translator = registry.translator(&config.driver, config.translator)?;
        let models = read_schema(&self.target.schema)?;

        let statements = translator.drop_tables(&models)?;

        output::write_statements(&statements, self.target.output.as_deref())?;
        output::report("Dropped", models.len(), statements.len(), self.target.output.as_deref());
        Ok(())
    }
}

impl TargetArgs {
    fn apply(&self, config: &mut CliConfig) {
        if let Some(driver) = &self.driver {
            config.driver = driver.clone();
        }
    }
}

fn read_schema(path: &Path) -> Result<Vec<ModelDescriptor>> {
    load_models(path).with_context(|| format!("Failed to load schema from {}", path.display()))
}
