use vcalc::DEFAULT_PRECISION;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Maximum number of decimals shown in results
    #[arg(short, long, global = true, env = "VCALC_PRECISION", default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate expressions and print them with their results
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },

    /// Read expressions from stdin, one per line
    ///
    /// `:history` prints everything evaluated so far, `:quit` ends the
    /// session.
    Repl,
}
