use std::process::ExitCode;

use clap::{Parser, Subcommand};
use emvqr_scheme::PaymentScheme;
use tracing_subscriber::EnvFilter;

mod commands;
mod formatters;
mod input;

use formatters::FormatMode;

#[derive(Parser)]
#[command(name = "emvqr")]
#[command(about = "EMV QR Payload Inspector - Decode PromptPay and other payment QR text")]
#[command(version)]
struct Args {
    /// Output format mode
    #[arg(short, long, value_enum, default_value_t = FormatMode::Human, global = true)]
    format: FormatMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the top-level TLV fields, or the fields of one template tag
    Decode {
        /// Payload text; omit or pass "-" to read one line from stdin
        payload: Option<String>,

        /// Decode the value of this tag as a nested template (e.g. 29)
        #[arg(short, long)]
        nested: Option<String>,

        /// Fail on truncated records or invalid length fields
        #[arg(long)]
        strict: bool,
    },

    /// Dump every TLV record in stream order, including template contents
    Dump {
        /// Payload text; omit or pass "-" to read one line from stdin
        payload: Option<String>,
    },

    /// Extract PromptPay account information and classify it
    Promptpay {
        /// Payload text; omit or pass "-" to read one line from stdin
        payload: Option<String>,

        /// Fail on truncated records or invalid length fields
        #[arg(long)]
        strict: bool,
    },

    /// Build the payment-method record for a scan under a declared scheme
    Onboard {
        /// Declared payment scheme (UPI, PROMPTPAY, or any other name)
        #[arg(short, long)]
        scheme: PaymentScheme,

        /// Payload text; omit or pass "-" to read one line from stdin
        payload: Option<String>,
    },
}

impl Command {
    fn payload_arg(&mut self) -> Option<String> {
        match self {
            Command::Decode { payload, .. }
            | Command::Dump { payload }
            | Command::Promptpay { payload, .. }
            | Command::Onboard { payload, .. } => payload.take(),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing subscriber with environment-based filtering
    // Set RUST_LOG=debug to see why a scan stopped early, RUST_LOG=trace for every record
    // Logs go to stderr so stdout stays usable for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::parse();
    let format_mode = args.format;

    let payload = match input::resolve_payload(args.command.payload_arg()) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Command::Decode { nested, strict, .. } => {
            commands::decode::cmd_decode(&payload, nested.as_deref(), strict, format_mode)
        }
        Command::Dump { .. } => commands::dump::cmd_dump(&payload, format_mode),
        Command::Promptpay { strict, .. } => {
            commands::promptpay::cmd_promptpay(&payload, strict, format_mode)
        }
        Command::Onboard { scheme, .. } => {
            commands::onboard::cmd_onboard(scheme, &payload, format_mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_onboard() {
        let mut args = Args::parse_from([
            "emvqr",
            "--format",
            "json",
            "onboard",
            "--scheme",
            "promptpay",
            "29230012A0000006770101031235902Jo",
        ]);
        assert_eq!(args.format, FormatMode::Json);
        assert_eq!(
            args.command.payload_arg().as_deref(),
            Some("29230012A0000006770101031235902Jo")
        );
        assert!(matches!(
            args.command,
            Command::Onboard { scheme: PaymentScheme::PromptPay, .. }
        ));
    }

    #[test]
    fn test_parse_decode_nested() {
        let args = Args::parse_from(["emvqr", "decode", "--nested", "29", "--strict"]);
        match args.command {
            Command::Decode { payload, nested, strict } => {
                assert_eq!(payload, None);
                assert_eq!(nested.as_deref(), Some("29"));
                assert!(strict);
            }
            _ => panic!("expected decode"),
        }
        assert_eq!(args.format, FormatMode::Human);
    }
}
