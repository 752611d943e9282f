//! Monke CLI
//!
//! Token REPL and lexing commands for the Monkey language.

use monke::{init_tracing, lex_file, run_repl, DriverError, ReplConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        if matches!(err, DriverError::UnknownCommand(_) | DriverError::UnknownOption(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), DriverError> {
    let Some(command) = args.get(1) else {
        return start_repl(&[]);
    };

    match command.as_str() {
        "repl" => start_repl(&args[2..]),
        "lex" => {
            let path = args.get(2).ok_or(DriverError::MissingArgument("lex <file>"))?;
            lex_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Monke {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // Bare REPL flags: `monke --no-echo`
        flag if flag.starts_with('-') => start_repl(&args[1..]),
        other => Err(DriverError::UnknownCommand(other.to_string())),
    }
}

fn start_repl(flags: &[String]) -> Result<(), DriverError> {
    let config = ReplConfig::from_args(flags)?;
    run_repl(config)
}

fn print_usage() {
    println!("Monke: the Monkey language tokenizer");
    println!();
    println!("Usage: monke [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl [options]       Start the token REPL (default)");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("REPL options:");
    println!("  --prompt=<text>      Prompt printed before each line (default: \">> \")");
    println!("  --no-echo            Do not echo each line before its tokens");
    println!("  --quiet, -q          Skip the greeting");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing (e.g. RUST_LOG=monke=debug)");
    println!("  MONKE_LOG_TREE       Render tracing output as an indented tree");
    println!();
    println!("Examples:");
    println!("  monke");
    println!("  monke --no-echo --prompt='monke> '");
    println!("  monke lex program.mk");
}
