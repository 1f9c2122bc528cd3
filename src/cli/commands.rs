// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords
    Password {
        /// Password length, clamped to 4..=128
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Generate version 4 UUIDs
    Uuid {
        /// How many UUIDs to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Score the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Run the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
    },
}
