use clap::{Args as ClapArgs, Parser, Subcommand};
use mdbom::config::{ConfigFile, CONFIG_FILENAME};
use std::path::PathBuf;

/// Generate Markdown attribution documents from CycloneDX BOM files
#[derive(Parser, Debug)]
#[command(name = "mdbom")]
#[command(version)]
#[command(about = "Generate Markdown attribution documents from CycloneDX BOM files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a short description of mdbom and where to start
    Info,
    /// Render the packages of one or more BOM files into a Markdown document
    Generate(GenerateArgs),
    /// Write a config file so that `mdbom generate` runs without flags
    Setup(SetupArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// BOM file, or a directory whose `.json` files are all read
    #[arg(short, long, value_name = "PATH")]
    pub bom: Option<PathBuf>,

    /// Only keep packages of this purl type (e.g. pypi, npm)
    #[arg(short, long = "package-type", value_name = "TYPE")]
    pub package_type: Option<String>,

    /// Handlebars template (defaults to the built-in attribution table)
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./mdbom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress and warning messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Effective `generate` settings after flags and config are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub bom_path: Option<PathBuf>,
    pub package_type: String,
    pub template_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl GenerateArgs {
    /// Merges the flags over `config`; a flag always wins over a config value
    pub fn resolve(&self, config: Option<&ConfigFile>) -> GenerateOptions {
        let from_config = |value: Option<&String>| {
            value
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        GenerateOptions {
            bom_path: self
                .bom
                .clone()
                .or_else(|| from_config(config.map(|c| &c.input.bom_file))),
            package_type: self
                .package_type
                .clone()
                .or_else(|| config.map(|c| c.input.bom_type.clone()))
                .unwrap_or_default(),
            template_path: self
                .template
                .clone()
                .or_else(|| from_config(config.map(|c| &c.input.template_file))),
            output_path: self
                .output
                .clone()
                .or_else(|| from_config(config.map(|c| &c.output.markdown_file))),
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct SetupArgs {
    /// BOM file or directory to read
    #[arg(short, long, value_name = "PATH")]
    pub bom: String,

    /// Only keep packages of this purl type (e.g. pypi, npm)
    #[arg(short, long = "package-type", value_name = "TYPE")]
    pub package_type: Option<String>,

    /// Handlebars template to render
    #[arg(short, long, value_name = "PATH")]
    pub template: String,

    /// Markdown file to write
    #[arg(short, long, value_name = "PATH")]
    pub output: String,

    /// Where to write the config file
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

impl SetupArgs {
    pub fn to_config(&self) -> ConfigFile {
        ConfigFile::new(
            self.bom.as_str(),
            self.package_type.as_deref().unwrap_or_default(),
            self.template.as_str(),
            self.output.as_str(),
        )
    }
}
