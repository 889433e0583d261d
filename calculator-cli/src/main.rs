use anyhow::{Context, Result};
use calculator::interpreter::syntax::expression_tree::Node;
use calculator::interpreter::{calculate, convert, tokens_to_string};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::io;
use std::io::{BufRead, Write};

/// Calculates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate. Expressions are read line by line from
    /// standard input when it is omitted.
    expression: Option<String>,

    /// Print the expression tree before the result
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &args.expression {
        Some(expression) => report(expression, args.tree, &mut output)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read expression from standard input")?;
                report(&line, args.tree, &mut output)?;
            }
        }
    }

    Ok(())
}

/// Writes the result of one expression. Calculation errors are results too,
/// so only a failing writer makes this fail.
fn report(expression: &str, show_tree: bool, output: &mut impl Write) -> Result<()> {
    if let Ok(tree) = convert(expression) {
        log::info!("calculating {}", describe(expression, &tree)?);
        if show_tree {
            write!(output, "{}", tree).context("Failed to write expression tree")?;
        }
    }

    writeln!(output, "{}", calculate(expression)).context("Failed to write result")?;
    Ok(())
}

/// The regenerated infix form of the expression, or the input as typed when a
/// numeral does not fit an `f64` and would regenerate as `inf`.
fn describe(expression: &str, tree: &Node) -> Result<String> {
    if tree.literals_are_finite() {
        tokens_to_string(&tree.to_infix())
    } else {
        Ok(expression.trim().to_string())
    }
}
