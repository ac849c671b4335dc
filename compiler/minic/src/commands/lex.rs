//! `minic lex`: print the token stream of a source file.

use std::io::{self, Write};

use minic_lexer::SourceBuffer;
use tracing::debug;

use super::{read_source, CliError};

const LEX_USAGE: &str = "Usage: minic lex <file|-> [--strict] [--quiet]";

/// Options for `minic lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Source path, or `-` for stdin.
    pub path: String,
    /// Stop at the first unexpected character and fail.
    pub strict: bool,
    /// Print only the final counts.
    pub quiet: bool,
}

/// Token and error counts for one listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LexSummary {
    tokens: usize,
    errors: usize,
}

/// Parse the arguments following `lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--quiet" | "-q" => options.quiet = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::Usage(format!(
                    "unknown option '{flag}'\n{LEX_USAGE}"
                )));
            }
            file if path.is_none() => path = Some(file.to_owned()),
            extra => {
                return Err(CliError::Usage(format!(
                    "unexpected argument '{extra}'\n{LEX_USAGE}"
                )));
            }
        }
    }

    options.path = path.ok_or_else(|| CliError::Usage(LEX_USAGE.to_owned()))?;
    Ok(options)
}

/// Lex a file and print the token stream to stdout.
#[tracing::instrument(level = "debug", skip_all, fields(path = %options.path))]
pub fn lex_file(options: &LexOptions) -> Result<(), CliError> {
    let content = read_source(&options.path)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = print_tokens(&content, options, &mut out);
    // Tokens printed before a strict-mode failure still reach stdout.
    out.flush()?;

    let summary = result?;
    debug!(
        tokens = summary.tokens,
        errors = summary.errors,
        "lex finished"
    );
    Ok(())
}

/// Write one trace line per token, ending with the EOF token.
///
/// Under `--strict` the listing stops after the first error token.
fn print_tokens(
    source: &[u8],
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<LexSummary, CliError> {
    let buf = SourceBuffer::from_bytes(source);
    let output = minic_lexer::lex(&buf);

    if !options.quiet {
        for token in &output.tokens {
            writeln!(out, "{token}")?;
            if options.strict && token.is_error() {
                break;
            }
        }
    }

    if options.strict {
        if let Some(&err) = output.errors.first() {
            return Err(err.into());
        }
    }

    let summary = LexSummary {
        tokens: output.tokens.len(),
        errors: output.errors.len(),
    };
    if options.quiet {
        writeln!(out, "tokens: {}, errors: {}", summary.tokens, summary.errors)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    fn render(source: &str, options: &LexOptions) -> (String, Result<LexSummary, CliError>) {
        render_bytes(source.as_bytes(), options)
    }

    fn render_bytes(source: &[u8], options: &LexOptions) -> (String, Result<LexSummary, CliError>) {
        let mut out = Vec::new();
        let result = print_tokens(source, options, &mut out);
        (String::from_utf8_lossy(&out).into_owned(), result)
    }

    // === Option parsing ===

    #[test]
    fn parses_path_and_flags() {
        let options = parse_lex_options(&args(&["--strict", "main.mc", "-q"]));
        assert_eq!(
            options.ok(),
            Some(LexOptions {
                path: "main.mc".to_owned(),
                strict: true,
                quiet: true,
            })
        );
    }

    #[test]
    fn dash_means_stdin() {
        let options = parse_lex_options(&args(&["-"])).ok();
        assert_eq!(options.map(|o| o.path), Some("-".to_owned()));
    }

    #[test]
    fn missing_path_is_usage_error() {
        assert!(matches!(
            parse_lex_options(&args(&["--quiet"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        let err = parse_lex_options(&args(&["a.mc", "--verbose"]));
        match err {
            Err(CliError::Usage(msg)) => assert!(msg.contains("--verbose"), "{msg}"),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn second_path_is_usage_error() {
        assert!(matches!(
            parse_lex_options(&args(&["a.mc", "b.mc"])),
            Err(CliError::Usage(_))
        ));
    }

    // === Rendering ===

    #[test]
    fn prints_one_line_per_token() {
        let (text, result) = render("x <= 10\ny", &LexOptions::default());
        assert_eq!(
            text,
            "TOKEN_IDENT: line 1: x\n\
             TOKEN_LE: line 1: <=\n\
             TOKEN_INT_LIT: line 1: 10\n\
             TOKEN_IDENT: line 2: y\n\
             TOKEN_EOF: line 2: \n"
        );
        assert_eq!(
            result.ok(),
            Some(LexSummary {
                tokens: 5,
                errors: 0
            })
        );
    }

    #[test]
    fn error_tokens_are_listed_and_counted() {
        let (text, result) = render("@x", &LexOptions::default());
        assert_eq!(
            text,
            "TOKEN_ERROR: line 1: Unexpected character\n\
             TOKEN_IDENT: line 1: x\n\
             TOKEN_EOF: line 1: \n"
        );
        assert_eq!(result.ok().map(|s| s.errors), Some(1));
    }

    #[test]
    fn strict_stops_at_first_error() {
        let options = LexOptions {
            strict: true,
            ..LexOptions::default()
        };
        let (text, result) = render("a\nb & c", &options);
        assert_eq!(
            text,
            "TOKEN_IDENT: line 1: a\n\
             TOKEN_IDENT: line 2: b\n\
             TOKEN_ERROR: line 2: Unexpected character\n"
        );
        match result {
            Err(CliError::Lex(err)) => {
                assert_eq!(err.to_string(), "line 2: Unexpected character '&'");
            }
            other => panic!("expected lex error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_byte_is_listed_as_error() {
        let (text, result) = render_bytes(b"x \xE9 y", &LexOptions::default());
        assert_eq!(
            text,
            "TOKEN_IDENT: line 1: x\n\
             TOKEN_ERROR: line 1: Unexpected character\n\
             TOKEN_IDENT: line 1: y\n\
             TOKEN_EOF: line 1: \n"
        );
        assert_eq!(result.ok().map(|s| s.errors), Some(1));
    }

    #[test]
    fn strict_reports_non_ascii_byte_in_hex() {
        let options = LexOptions {
            strict: true,
            ..LexOptions::default()
        };
        let (_, result) = render_bytes(b"a\n\xFF", &options);
        match result {
            Err(CliError::Lex(err)) => {
                assert_eq!(err.to_string(), "line 2: Unexpected character 0xFF");
            }
            other => panic!("expected lex error, got {other:?}"),
        }
    }

    #[test]
    fn quiet_prints_counts_only() {
        let options = LexOptions {
            quiet: true,
            ..LexOptions::default()
        };
        let (text, _) = render("int x; $", &options);
        assert_eq!(text, "tokens: 5, errors: 1\n");
    }
}
