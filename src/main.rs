use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use lox::{
    errors::errors::{Error, ErrorReporter},
    format_error,
    lexer::lexer::scan_tokens,
};
use rustyline::{error::ReadlineError, DefaultEditor};

const EXIT_DATA_ERROR: i32 = 65;
const EXIT_NO_INPUT: i32 = 66;

#[derive(Parser)]
#[command(name = "lox", about = "Scan Lox source and print its tokens")]
struct Cli {
    /// Path to a .lox file to scan; starts a prompt when omitted
    file: Option<PathBuf>,
    /// Show the offending source line under each error
    #[arg(long)]
    pretty: bool,
    /// Print how long scanning took
    #[arg(long)]
    time: bool,
}

/// Prints errors as they arrive and remembers that one happened.
struct ConsoleReporter<'a> {
    source: &'a str,
    file_name: &'a str,
    pretty: bool,
    had_error: bool,
}

impl<'a> ConsoleReporter<'a> {
    fn new(source: &'a str, file_name: &'a str, pretty: bool) -> Self {
        ConsoleReporter {
            source,
            file_name,
            pretty,
            had_error: false,
        }
    }
}

impl ErrorReporter for ConsoleReporter<'_> {
    fn report(&mut self, error: Error) {
        eprintln!("[line {}] Error: {}", error.get_line(), error);

        if self.pretty {
            eprint!("{}", format_error(&error, self.source, self.file_name));
        }

        self.had_error = true;
    }
}

fn main() {
    let cli = Cli::parse();

    match &cli.file {
        Some(file) => run_file(file, &cli),
        None => run_prompt(&cli),
    }
}

fn run_file(file: &Path, cli: &Cli) {
    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: could not read '{}': {}", file.display(), e);
            process::exit(EXIT_NO_INPUT);
        }
    };

    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    if run(&source, &file_name, cli) {
        process::exit(EXIT_DATA_ERROR);
    }
}

fn run_prompt(cli: &Cli) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: could not start prompt: {}", err);
            process::exit(1);
        }
    };

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                // Errors on one line don't carry over to the next.
                run(&line, "repl", cli);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }
}

/// Scans `source`, prints every token and returns whether an error was reported.
fn run(source: &str, file_name: &str, cli: &Cli) -> bool {
    let mut reporter = ConsoleReporter::new(source, file_name, cli.pretty);

    let start = Instant::now();
    let tokens = scan_tokens(source, &mut reporter);

    if cli.time {
        println!("Tokenized in {:?}", start.elapsed());
    }

    for token in &tokens {
        println!("{}", token);
    }

    reporter.had_error
}
