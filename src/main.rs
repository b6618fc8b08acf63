use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use treelox::{Session, ast::print_program, error::Error, parse, scan};

/// Exit status for malformed input: lexical and syntax errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status when the script file cannot be read.
const EXIT_NO_INPUT: u8 = 66;
/// Exit status for runtime errors.
const EXIT_SOFTWARE: u8 = 70;

/// treelox runs scripts written in a small dynamically-typed language, or
/// starts an interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run. Starts a REPL when omitted.
    script: Option<PathBuf>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "script")]
    eval: Option<String>,

    /// Prints the parsed program instead of running it.
    #[arg(long, conflicts_with = "tokens")]
    print_ast: bool,

    /// Prints the scanned tokens instead of running the program.
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = match (&args.eval, &args.script) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::from(EXIT_NO_INPUT);
            },
        },
        (None, None) => return repl(),
    };

    let result = if args.tokens {
        dump_tokens(&source)
    } else if args.print_ast {
        dump_ast(&source)
    } else {
        treelox::run(&source, io::stdout().lock())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            exit_code(&e)
        },
    }
}

/// Installs a stderr logger filtered by `RUST_LOG`. Does nothing when the
/// variable is unset.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Lex(_) | Error::Parse(_) => ExitCode::from(EXIT_DATA_ERROR),
        Error::Runtime(_) => ExitCode::from(EXIT_SOFTWARE),
    }
}

fn dump_tokens(source: &str) -> Result<(), Error> {
    for token in scan(source)? {
        println!("{token}");
    }
    Ok(())
}

fn dump_ast(source: &str) -> Result<(), Error> {
    let program = parse(&scan(source)?)?;
    print!("{}", print_program(&program));
    Ok(())
}

/// Reads lines from stdin and runs each one in a single session, so
/// variables persist between lines. Errors are reported and the prompt
/// continues.
fn repl() -> ExitCode {
    let mut session = Session::new(io::stdout());
    let mut lines = io::stdin().lock().lines();

    loop {
        if let Err(e) = prompt() {
            eprintln!("Failed to write to stdout: {e}");
            return ExitCode::FAILURE;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };
        if let Err(e) = session.run(&line) {
            eprintln!("{e}");
        }
    }
    println!();
    ExitCode::SUCCESS
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
