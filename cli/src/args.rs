use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bigint")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ByteOrder {
    Little,
    Big,
}

impl From<ByteOrder> for bigint_cli::commands::bytes::Endian {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Self::Little,
            ByteOrder::Big => Self::Big,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate `a OP b`, `OP a`, or a single value
    Eval {
        /// Expression tokens, e.g. `12 * -34` or `~ 7`
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
        /// Output radix (2..=36)
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },
    /// Print the minimal two's-complement encoding of a value as hex bytes
    Bytes {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Byte order of the output
        #[arg(long, value_enum, default_value_t = ByteOrder::Little)]
        order: ByteOrder,
    },
    /// Decode hex two's-complement bytes into a decimal value
    FromBytes {
        /// Hex string, e.g. `80` or `0080`
        hex: String,
        /// Byte order of the input
        #[arg(long, value_enum, default_value_t = ByteOrder::Little)]
        order: ByteOrder,
    },
    /// Evaluate expressions line by line from a file or stdin
    Repl {
        /// Read expressions from this file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
        /// Output radix (2..=36)
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },
}
