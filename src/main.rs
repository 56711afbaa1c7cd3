mod cli;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use cli::{Cli, Command};
use vcalc::{History, HistoryEntry};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Command::Eval { expressions } => eval(&expressions, cli.precision, &mut stdout),
        Command::Repl => repl(io::stdin().lock(), &mut stdout, cli.precision),
    };

    match result {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    }
}

/// Returns whether every expression evaluated successfully.
fn eval(expressions: &[String], precision: usize, out: &mut impl Write) -> io::Result<bool> {
    let mut history = History::new();
    let mut all_ok = true;

    for expression in expressions {
        let result = vcalc::evaluate(expression);
        all_ok &= result.is_ok();
        history.push(HistoryEntry::new(
            expression.as_str(),
            vcalc::render(&result, precision),
        ));
    }

    print_history(out, &history)?;
    Ok(all_ok)
}

fn repl(input: impl BufRead, out: &mut impl Write, precision: usize) -> io::Result<bool> {
    let mut history = History::new();

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => print_history(out, &history)?,
            expression => {
                let entry = history.record(expression, precision);
                writeln!(out, "= {}", entry.result())?;
            }
        }
        out.flush()?;
    }

    log::debug!("session ended after {} evaluations", history.len());
    Ok(true)
}

fn print_history(out: &mut impl Write, history: &History) -> io::Result<()> {
    for entry in history {
        writeln!(out, "{} = {}", entry.input(), entry.result())?;
    }
    Ok(())
}
