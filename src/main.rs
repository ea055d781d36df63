// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Command line tool to find integer roots of polynomials with integer coefficients.

use clap::{ArgAction, Parser};
use introots::{InvalidPolynomial, Polynomial};
use log::{debug, LevelFilter};
use num_bigint::BigInt;
use std::env;
use std::io::{self, Write};
use std::process;

const PROGRAM_EXPLANATION: &str = "
Usage:
$ python roots.py COEFF1 COEFF2 ...

Find integer roots of a polynomial with integer coefficients.

Example:

Find the roots of x^4 - 3x^3 - 75x^2 + 475x - 750.

$ python roots.py 1 -3 -75 475 -750
-10
3
5
";

#[derive(Parser, Debug)]
#[command(
    name = "introots",
    version,
    about = "Find integer roots of a polynomial with integer coefficients."
)]
struct Args {
    /// log more (repeat for more detail); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// coefficients, leading coefficient first
    #[arg(value_name = "COEFF", allow_negative_numbers = true)]
    coefficients: Vec<String>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn parse_coefficients<S: AsRef<str>>(
    arguments: &[S],
) -> Result<Polynomial<BigInt>, InvalidPolynomial> {
    Polynomial::parse_coefficients(arguments)
}

/// writes the roots one per line; writes nothing if there are none
fn print_roots<W: Write>(out: &mut W, roots: &[BigInt]) -> io::Result<()> {
    for root in roots {
        writeln!(out, "{}", root)?;
    }
    Ok(())
}

fn run(arguments: &[String]) -> io::Result<()> {
    let poly = parse_coefficients(arguments)?;
    debug!("finding integer roots of {}", poly);
    let roots = poly.integer_roots();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_roots(&mut out, &roots)?;
    out.flush()
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    if args.coefficients.is_empty() {
        println!("{}", PROGRAM_EXPLANATION);
        return;
    }
    if let Err(err) = run(&args.coefficients) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_parse_coefficients() {
        assert_eq!(
            parse_coefficients(&["2", "3"]).map(Polynomial::into_coefficients),
            Ok(big(&[2, 3]))
        );
        assert_eq!(
            parse_coefficients(&["1", "x"]),
            Err(InvalidPolynomial::MalformedCoefficient {
                index: 1,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_coefficients(&["0", "1"]),
            Err(InvalidPolynomial::ZeroLeadingCoefficient)
        );
    }

    #[test]
    fn test_print_roots() {
        let mut out = Vec::new();
        print_roots(&mut out, &big(&[2, 3])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n3\n");
        let mut out = Vec::new();
        print_roots(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(&["introots", "1", "-3", "-75", "475", "-750"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(args.coefficients, ["1", "-3", "-75", "475", "-750"]);
        let args = Args::try_parse_from(&["introots", "-vv", "-1", "2"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.coefficients, ["-1", "2"]);
        let args = Args::try_parse_from(&["introots"]).unwrap();
        assert!(args.coefficients.is_empty());
        assert!(Args::try_parse_from(&["introots", "--bogus"]).is_err());
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
