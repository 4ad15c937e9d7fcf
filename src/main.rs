use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use big_radix::{to_int, BigInt};

/// Multiply two integers as big_radix values and compare against native multiplication.
#[derive(Parser)]
#[clap(version, author, about)]
pub struct Cli {
    /// Left operand. Both operands are read from stdin when omitted.
    #[clap(allow_negative_numbers = true, requires = "rhs")]
    lhs: Option<i64>,
    /// Right operand.
    #[clap(allow_negative_numbers = true)]
    rhs: Option<i64>,
}

/// Takes the first two whitespace separated integers of `input`.
fn parse_operands(input: &str) -> Result<(i64, i64)> {
    let mut tokens = input.split_whitespace();
    let mut next = |name: &str| -> Result<i64> {
        let token = tokens
            .next()
            .ok_or_else(|| anyhow!("missing {} operand", name))?;
        token
            .parse()
            .with_context(|| format!("invalid {} operand `{}`", name, token))
    };
    let lhs = next("first")?;
    let rhs = next("second")?;
    Ok((lhs, rhs))
}

/// Both operands and their product in debug print form, then the product converted back
/// to `i64` next to the native product.
fn render_report(lhs: i64, rhs: i64) -> String {
    let a = BigInt::from(lhs);
    let b = BigInt::from(rhs);
    let c = &a * &b;
    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        a,
        b,
        c,
        to_int(&c),
        to_int(&a).wrapping_mul(to_int(&b))
    )
}

fn try_main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let (lhs, rhs) = match (cli.lhs, cli.rhs) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read operands from stdin")?;
            parse_operands(&input)?
        }
    };
    log::debug!("operands: {} and {}", lhs, rhs);

    print!("{}", render_report(lhs, rhs));
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        ::std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operands() {
        assert_eq!(parse_operands("9482 18964\n").unwrap(), (9482, 18964));
        assert_eq!(parse_operands("  -95\n\n18964 7").unwrap(), (-95, 18964));
        assert!(parse_operands("95").is_err());
        assert!(parse_operands("95 x").is_err());
        assert!(parse_operands("").is_err());
    }

    #[test]
    fn test_render_report() {
        let report = render_report(9482, 18964);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "+ 3 0 0 4 1 2");
        assert_eq!(lines[1], "+ 1 1 0 1 3 2 4");
        assert_eq!(lines[2], BigInt::from(9482i64 * 18964).to_string());
        assert_eq!(lines[3], "179816648");
        assert_eq!(lines[4], "179816648");

        let report = render_report(-3, 7);
        assert!(report.ends_with("-21\n-21\n"));
    }
}
