//! Command-line interface for truthtable
//!
//! Reads one boolean expression, either from the command line or as a
//! single line of standard input, and prints its tokens, its parsed tree,
//! its variables and its truth table.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use truthtable::{parse, tokenize, Error, Expr, TruthTable};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Expression to tabulate. Read from standard input when missing
    expression: Option<String>,
    /// Also print whether the expression is a tautology or a contradiction
    #[arg(long, short, default_value_t = false)]
    summary: bool,
}

fn read_expression(cli: &Cli) -> Result<String> {
    if let Some(ref expression) = cli.expression {
        return Ok(expression.clone());
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read expression from standard input")?;
    Ok(line)
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_expression(cli)?;
    let tokens = tokenize(&input);
    println!("Tokens: {:?}", tokens);

    let expr = Expr::from(parse(&tokens)?);
    println!("Parsed: {:?}", expr.ast());

    let table = TruthTable::new(&expr);
    println!("Variables: {:?}", table.variables());
    print!("{}", table);

    if cli.summary {
        println!("Expression {} is a {}", expr, table.classify());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        match err.downcast_ref::<Error>() {
            Some(parse_error) => eprintln!("Parse error: {}", parse_error.reason()),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}
