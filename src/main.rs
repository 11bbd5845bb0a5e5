mod cli;

use clap::Parser;
use cli::{Args, Command, GenerateArgs, SetupArgs};
use mdbom::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use mdbom::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use mdbom::adapters::outbound::rendering::HandlebarsRenderer;
use mdbom::application::dto::{AttributionRequest, AttributionResponse};
use mdbom::application::use_cases::GenerateAttributionUseCase;
use mdbom::config::{self, ConfigFile, CONFIG_FILENAME};
use mdbom::ports::outbound::{OutputPresenter, ProgressReporter};
use mdbom::shared::{ExitCode, Result};
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Info => {
            print_info();
            Ok(())
        }
        Command::Generate(generate) => run_generate(&generate),
        Command::Setup(setup) => run_setup(&setup),
    }
}

fn print_info() {
    println!(
        "{} {} - {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    );
    println!();
    println!("Run `mdbom setup --help` to create a {} file,", CONFIG_FILENAME);
    println!("then `mdbom generate` to render the attribution document.");
    println!("Run `mdbom generate --help` for all options.");
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let options = args.resolve(config.as_ref());

    // Validate the output target before doing any work
    let presenter: Box<dyn OutputPresenter> = match options.output_path {
        Some(path) => Box::new(FileSystemWriter::new(path)?),
        None => Box::new(StdoutPresenter::new()),
    };

    let mut builder = AttributionRequest::builder().package_type(options.package_type);
    if let Some(bom_path) = options.bom_path {
        builder = builder.bom_path(bom_path);
    }
    if let Some(template_path) = options.template_path {
        builder = builder.template_path(template_path);
    }
    let request = builder.build()?;

    let response = if args.quiet {
        generate_attribution(request, SilentProgressReporter::new())?
    } else {
        generate_attribution(request, StderrProgressReporter::new())?
    };

    presenter.present(&response.content)?;

    Ok(())
}

/// Loads the config given with `--config`, or `./mdbom.config.yml` if present
fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn generate_attribution<PR: ProgressReporter>(
    request: AttributionRequest,
    progress_reporter: PR,
) -> Result<AttributionResponse> {
    // Create use case with injected dependencies
    let use_case = GenerateAttributionUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        HandlebarsRenderer::new(),
        progress_reporter,
    );
    use_case.execute(request)
}

fn run_setup(args: &SetupArgs) -> Result<()> {
    config::create_config(&args.to_config(), &args.config, args.force)?;
    eprintln!("✅ Config written to {}", args.config.display());
    Ok(())
}
