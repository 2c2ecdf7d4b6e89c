use clap::Parser;
use ssh_keygen::commands::generate::GenerateCommand;
use ssh_keygen::key::creator::KeyCreator;
use ssh_keygen::parameters::{Commands, LogLevel, build_options};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "ssh-keygen-cli")]
struct Cli {
    /// Verbosity of the diagnostic output written to stderr
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            let options = build_options(&args);
            let output = GenerateCommand::new(KeyCreator).generate(options, &args.output_format)?;
            println!("{}", output);
            Ok(())
        }
    }
}
