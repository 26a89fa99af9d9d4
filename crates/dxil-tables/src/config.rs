use clap::{Parser, Subcommand, ValueEnum};

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "dxil-tables",
    version,
    about = "Dump and query the DXIL opcode, type-tag and limit tables."
)]
pub struct Args {
    /// Output format.
    ///
    /// Environment variable: `DXIL_TABLES_FORMAT`.
    #[arg(long, value_enum, env = "DXIL_TABLES_FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Log filter (tracing-subscriber EnvFilter syntax). Logs go to stderr.
    ///
    /// Environment variable: `DXIL_TABLES_LOG`.
    #[arg(long, env = "DXIL_TABLES_LOG", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every table with its kind and row count.
    List,

    /// Print every row of a table.
    Dump {
        /// Table name, e.g. `OpCode` or `BarrierMode` (case-insensitive).
        table: String,
    },

    /// Look up a row by name or by value (decimal or 0x-prefixed hex).
    Lookup {
        table: String,
        key: String,
    },

    /// Show an operation's value and the DXIL version that introduced it.
    Opcode {
        /// Operation name or value.
        key: String,
    },

    /// Pack or unpack a DXIL version word.
    #[command(subcommand)]
    Version(VersionCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum VersionCommand {
    /// Pack `major.minor` as `(major << 8) | minor`.
    Encode {
        /// Version as `major.minor`; defaults to the current DXIL version.
        version: Option<String>,
    },

    /// Unpack a version word into `major.minor`.
    Decode {
        /// Packed word (decimal or 0x-prefixed hex).
        packed: String,

        /// Reject words with bits set above bit 15 instead of ignoring them.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        strict: bool,
    },

    /// Print the current DXIL version.
    Current,
}

/// Resolved settings after flags and environment are applied.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub log_level: String,
    pub command: Command,
}

impl Config {
    pub fn load() -> Self {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Self {
        let log_level = args
            .log_level
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            format: args.format.unwrap_or_default(),
            log_level,
            command: args.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_to_text_and_warn() {
        let config = parse(&["dxil-tables", "list"]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
        assert!(matches!(config.command, Command::List));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&[
            "dxil-tables",
            "dump",
            "OpCode",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert!(matches!(config.command, Command::Dump { ref table } if table == "OpCode"));
    }

    #[test]
    fn blank_log_level_falls_back() {
        let config = parse(&["dxil-tables", "--log-level", "  ", "list"]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn version_subcommands() {
        let config = parse(&["dxil-tables", "version", "decode", "0x10103", "--strict"]);
        assert!(matches!(
            config.command,
            Command::Version(VersionCommand::Decode { ref packed, strict: true }) if packed == "0x10103"
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["dxil-tables", "--format", "yaml", "list"]).is_err());
    }
}
