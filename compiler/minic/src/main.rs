//! minic command-line driver.
//!
//! Currently a debugging front end for the scanner: `minic lex` prints the
//! token stream of a source file.

mod commands;
mod tracing_setup;

use commands::{lex_file, parse_lex_options, CliError};

const USAGE: &str = "\
Usage: minic <command> [args]

Commands:
  lex <file|-> [options]   Print every token in <file> (`-` reads stdin)
  help                     Show this message
  version                  Show the toolchain version

Options for lex:
  --strict                 Stop at the first unexpected character (exit 1)
  -q, --quiet              Print only the token/error counts

Environment:
  MINIC_LOG                Log filter, e.g. `minic_lexer=trace` (falls back to RUST_LOG)
  MINIC_LOG_TREE=1         Indented span tree instead of flat log lines";

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.get(1) else {
        println!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "lex" => {
            let options = parse_lex_options(&args[2..])?;
            lex_file(&options)
        }
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("minic {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command '{other}'\n\n{USAGE}"
        ))),
    }
}
