//! saslprep - decompose and canonically order text the way SASLprep does
//!
//! Exposes the library's operations on the command line: preparing text or
//! raw code point arrays, converting between text and arrays, and dumping
//! the decomposition table.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use saslprep_decompose::{check_encoding, decode_str, encode, CodePoint, Normalizer, TableEntry};

/// Decompose and canonically order text with the SASLprep decomposition table.
#[derive(Debug, Parser)]
#[command(name = "saslprep", version)]
struct CliArgs {
    /// Declared encoding of the input text; only UTF-8 is accepted.
    #[arg(long, global = true, default_value = "UTF-8")]
    encoding: String,

    /// Maximum number of nested mappings to follow.
    #[arg(long, global = true, default_value_t = saslprep_decompose::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Grow the result as it is built instead of sizing it up front.
    #[arg(long, global = true)]
    no_presize: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prepare text and print the result.
    Prepare {
        /// Text to prepare.
        text: String,
        /// Print the prepared code points as an array instead of text.
        #[arg(long)]
        array: bool,
        /// Fail if the prepared output is not in canonical order.
        #[arg(long)]
        check: bool,
    },
    /// Prepare an array of packed code points.
    PrepareArray {
        /// Packed code points, decimal (signed or unsigned) or 0x-prefixed hex.
        #[arg(required = true, allow_hyphen_values = true)]
        codes: Vec<String>,
    },
    /// Convert text into an array of packed code points.
    ToArray {
        /// Text to convert.
        text: String,
    },
    /// Convert an array of packed code points back into text.
    FromArray {
        /// Packed code points, decimal (signed or unsigned) or 0x-prefixed hex.
        #[arg(allow_hyphen_values = true)]
        codes: Vec<String>,
    },
    /// Print every row of the decomposition table.
    Table,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = CliArgs::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(args: CliArgs, out: &mut W) -> anyhow::Result<()> {
    let CliArgs {
        encoding,
        max_depth,
        no_presize,
        command,
    } = args;

    check_encoding(&encoding)?;
    let normalizer = Normalizer::new().max_depth(max_depth).presize(!no_presize);

    match command {
        Command::Prepare { text, array, check } => {
            let decoded = decode_str(&text).context("failed to decode input text")?;
            let prepared = normalizer
                .prepare(&decoded)
                .context("failed to prepare input text")?;
            if check {
                check_order(&normalizer, &prepared)?;
            }
            if array {
                writeln!(out, "{}", format_array(&prepared))?;
            } else {
                out.write_all(&encode(&prepared))?;
                writeln!(out)?;
            }
        }
        Command::PrepareArray { codes } => {
            let input = parse_codes(&codes)?;
            let prepared = normalizer
                .prepare(&input)
                .context("failed to prepare code point array")?;
            writeln!(out, "{}", format_array(&prepared))?;
        }
        Command::ToArray { text } => {
            let decoded = decode_str(&text).context("failed to decode input text")?;
            writeln!(out, "{}", format_array(&decoded))?;
        }
        Command::FromArray { codes } => {
            let input = parse_codes(&codes)?;
            out.write_all(&encode(&input))?;
            writeln!(out)?;
        }
        Command::Table => {
            let table = normalizer.table();
            log::debug!("dumping {} table rows", table.len());
            for entry in table.entries() {
                writeln!(out, "{}", format_row(&entry))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Fails unless `prepared` is in canonical order.
fn check_order(normalizer: &Normalizer<'_>, prepared: &[CodePoint]) -> anyhow::Result<()> {
    if !normalizer.is_canonically_ordered(prepared)? {
        bail!("prepared output is not in canonical order");
    }
    Ok(())
}

/// Formats one table dump row: code, class and mapping, tab separated.
/// An empty mapping prints as `NULL`.
fn format_row(entry: &TableEntry<'_>) -> String {
    let mapping = entry.decomposition().collect::<Vec<_>>();
    let mapping = if mapping.is_empty() {
        "NULL".to_owned()
    } else {
        format_array(&mapping)
    };
    format!(
        "{}\t{}\t{}",
        entry.code_point().to_signed(),
        entry.combining_class(),
        mapping
    )
}

/// Parses one packed code point given as decimal or `0x` hex.
fn parse_code(s: &str) -> anyhow::Result<CodePoint> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let v = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex code point {s:?}"))?;
        return Ok(CodePoint::from_inner(v));
    }
    if let Ok(v) = s.parse::<i32>() {
        return Ok(CodePoint::from_signed(v));
    }
    let v = s
        .parse::<u32>()
        .with_context(|| format!("invalid code point {s:?}"))?;
    Ok(CodePoint::from_inner(v))
}

/// Parses code points given either one per argument or as a `{a,b,c}`
/// array literal.
fn parse_codes(args: &[String]) -> anyhow::Result<Vec<CodePoint>> {
    let mut codes = Vec::new();
    for arg in args {
        let arg = arg.trim();
        let arg = arg
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(arg);
        for part in arg.split(',').filter(|part| !part.trim().is_empty()) {
            codes.push(parse_code(part)?);
        }
    }
    Ok(codes)
}

/// Formats code points as an array literal of signed 32-bit integers.
fn format_array(codes: &[CodePoint]) -> String {
    let parts = codes
        .iter()
        .map(|code| code.to_signed().to_string())
        .collect::<Vec<_>>();
    format!("{{{}}}", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(CodePoint::from('a'), parse_code("97").unwrap());
        assert_eq!(CodePoint::from('é'), parse_code("0xC3A9").unwrap());
        let grin = CodePoint::from('\u{1F600}');
        assert_eq!(grin, parse_code(&grin.to_signed().to_string()).unwrap());
        assert_eq!(grin, parse_code(&grin.into_inner().to_string()).unwrap());
        assert!(parse_code("zz").is_err());
    }

    #[test]
    fn test_parse_array_literal() {
        let args = vec!["{97, 50089}".to_owned()];
        assert_eq!(
            vec![CodePoint::from('a'), CodePoint::from('é')],
            parse_codes(&args).unwrap()
        );
        assert!(parse_codes(&["{}".to_owned()]).unwrap().is_empty());
    }

    #[test]
    fn test_format_array() {
        assert_eq!("{}", format_array(&[]));
        assert_eq!(
            "{101,52353}",
            format_array(&[CodePoint::from('e'), CodePoint::from('\u{0301}')])
        );
    }

    fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
        let args = CliArgs::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_format_row() {
        let acute = saslprep_decompose::lookup(CodePoint::from('\u{0301}')).unwrap();
        assert_eq!("52353\t230\tNULL", format_row(&acute));

        let e_acute = saslprep_decompose::lookup(CodePoint::from('é')).unwrap();
        assert_eq!("50089\t0\t{101,52353}", format_row(&e_acute));
    }

    #[test]
    fn test_table_dump() {
        let (result, out) = run_args(&["saslprep", "table"]);
        result.unwrap();
        let first = out.lines().next().unwrap();
        // U+00A0 maps to a plain space
        assert_eq!("49824\t0\t{32}", first);
        assert!(out.lines().any(|line| line == "52353\t230\tNULL"));
    }

    #[test]
    fn test_encoding_checked_first() {
        let (result, out) = run_args(&["saslprep", "--encoding", "LATIN1", "to-array", "abc"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<saslprep_decompose::Error>(),
            Some(saslprep_decompose::Error::UnsupportedEncoding(name)) if name == "LATIN1"
        ));
        assert!(out.is_empty());

        let (result, out) = run_args(&["saslprep", "--encoding", "LATIN1", "table"]);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_prepare_output() {
        let (result, out) =
            run_args(&["saslprep", "prepare", "--check", "e\u{0301}\u{0323}"]);
        result.unwrap();
        assert_eq!("e\u{0323}\u{0301}\n", out);

        let (result, out) = run_args(&["saslprep", "prepare", "--array", "é"]);
        result.unwrap();
        assert_eq!("{101,52353}\n", out);
    }

    #[test]
    fn test_check_rejects_out_of_order() {
        let normalizer = Normalizer::new();
        let ordered = "e\u{0323}\u{0301}".chars().map(CodePoint::from).collect::<Vec<_>>();
        assert!(check_order(&normalizer, &ordered).is_ok());

        let unordered = "e\u{0301}\u{0323}".chars().map(CodePoint::from).collect::<Vec<_>>();
        let err = check_order(&normalizer, &unordered).unwrap_err();
        assert_eq!("prepared output is not in canonical order", err.to_string());
    }

    #[test]
    fn test_cli_parses() {
        let args =
            CliArgs::try_parse_from(["saslprep", "--encoding", "utf8", "prepare", "é"]).unwrap();
        assert!(matches!(args.command, Command::Prepare { .. }));
        assert!(CliArgs::try_parse_from(["saslprep", "prepare-array", "-1"]).is_ok());
    }
}
