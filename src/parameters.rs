use clap::{Args, Subcommand, ValueEnum};

use crate::key::KeyType;
use crate::key::creator::Options;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a new SSH key pair and prints it to stdout.
    ///
    /// The private key is printed in the OpenSSH format, unencrypted, followed by the public key
    /// in the `authorized_keys` format.
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Type of key to generate: 'rsa' or 'ecdsa'
    #[arg(long, short = 't')]
    pub key_type: String,

    /// Modulus length in bits for RSA, or curve size (256, 384, 521) for ECDSA.
    /// Defaults to 3072 for RSA and 256 for ECDSA.
    #[arg(long, short)]
    pub size: Option<u32>,

    /// Comment to attach to the generated key
    #[arg(long, short)]
    pub comment: Option<String>,

    /// Select how the generated key pair is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// OpenSSH private key followed by the public key line
    #[value(name = "Plain")]
    Plain,
    /// Key type, public key, fingerprint and private key in json format
    #[value(name = "Json")]
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[default]
    #[value(name = "warn")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Builds the creation options, filling in the default size of known key types.
///
/// Unknown key types are passed through untouched so the registry reports them.
pub fn build_options(args: &GenerateArgs) -> Options {
    let size = args.size.unwrap_or_else(|| {
        args.key_type
            .parse::<KeyType>()
            .map(|key_type| key_type.default_size())
            .unwrap_or_default()
    });

    Options {
        key_type: args.key_type.clone(),
        size,
        comment: args.comment.clone(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse_generate(args: &[&str]) -> GenerateArgs {
        let cli = TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap();
        match cli.command {
            Commands::Generate(args) => args,
        }
    }

    #[rstest]
    #[case(&["generate", "--key-type", "rsa"], "rsa", 3072)]
    #[case(&["generate", "-t", "ecdsa"], "ecdsa", 256)]
    #[case(&["generate", "-t", "ecdsa", "--size", "521"], "ecdsa", 521)]
    #[case(&["generate", "-t", "rsa", "-s", "4096"], "rsa", 4096)]
    #[case(&["generate", "-t", "ed25519"], "ed25519", 0)]
    fn options_from_args(
        #[case] args: &[&str],
        #[case] expected_key_type: &str,
        #[case] expected_size: u32,
    ) {
        let options = build_options(&parse_generate(args));
        assert_eq!(options.key_type, expected_key_type);
        assert_eq!(options.size, expected_size);
        assert_eq!(options.comment, None);
    }

    #[test]
    fn options_with_comment_and_format() {
        let args = parse_generate(&[
            "generate",
            "-t",
            "ecdsa",
            "--comment",
            "me@host",
            "--output-format",
            "Json",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(build_options(&args).comment.as_deref(), Some("me@host"));
    }

    #[test]
    fn default_output_format_is_plain() {
        let args = parse_generate(&["generate", "-t", "rsa"]);
        assert_eq!(args.output_format, OutputFormat::Plain);
    }

    #[test]
    fn key_type_is_required() {
        assert!(TestCli::try_parse_from(["test", "generate"]).is_err());
    }
}
