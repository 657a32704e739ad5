//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use std::path::PathBuf;
use zipsel_core::CompressionLevel;
use zipsel_core::EncryptionMethod;

#[derive(Parser)]
#[command(name = "zipsel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new archive from paths and patterns
    Create(CreateArgs),
    /// Extract archive contents
    Extract(ExtractArgs),
    /// Check whether a file is a ZIP archive by content
    Probe(ProbeArgs),
    /// Test a candidate path against one or more patterns
    Match(MatchArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input paths or patterns: files, directories, globs like '*.txt',
    /// regexes, extensions like '.log', or directory prefixes like 'src/'
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Exclude pattern (can be repeated); exclusion wins over inclusion
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Compression level
    #[arg(short = 'l', long, value_enum, default_value_t = CompressionArg::Normal)]
    pub compression: CompressionArg,

    /// Encryption method (requires --password)
    #[arg(short = 'e', long, value_enum, default_value_t = EncryptionArg::None)]
    pub encryption: EncryptionArg,

    /// Password for encrypted archives
    #[arg(short = 'p', long, value_name = "PASSWORD")]
    pub password: Option<String>,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Include pattern (can be repeated); extracts everything when omitted
    #[arg(long = "include", short = 'i', value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Password for encrypted archives
    #[arg(short = 'p', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Overwrite existing files
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ProbeArgs {
    /// Path to the file to probe
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Candidate path to test
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Patterns to test against; the candidate matches if any pattern does
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

/// Compression level names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    /// Store entries without compression
    None,
    /// Low-effort deflate
    Fast,
    /// Default deflate effort
    Normal,
    /// High-effort deflate
    Maximum,
    /// Highest-effort deflate
    Ultra,
}

impl From<CompressionArg> for CompressionLevel {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => Self::None,
            CompressionArg::Fast => Self::Fast,
            CompressionArg::Normal => Self::Normal,
            CompressionArg::Maximum => Self::Maximum,
            CompressionArg::Ultra => Self::Ultra,
        }
    }
}

/// Encryption method names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncryptionArg {
    /// No encryption
    None,
    /// Legacy ZipCrypto (weak, widely compatible)
    Zipcrypto,
    /// AES-256 entry encryption
    Aes256,
}

impl From<EncryptionArg> for EncryptionMethod {
    fn from(arg: EncryptionArg) -> Self {
        match arg {
            EncryptionArg::None => Self::None,
            EncryptionArg::Zipcrypto => Self::ZipCrypto,
            EncryptionArg::Aes256 => Self::Aes256,
        }
    }
}
