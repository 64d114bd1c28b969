use clap::Parser; // clap crate for CLI argument parsing
use std::{error::Error, fs, process::ExitCode};

const DEMO_PROGRAM: &str = r#"
var a = 5
mkfunc add(a, b) {
    return a + b
}
var b = add(5, 10)
print(b)
"#;

#[derive(Parser, Debug)]
#[command(version, about = "Tokenize and parse a Hoplite script", long_about = None)]
struct Args {
    /// Path to the source file; a built-in demo program is used when omitted
    input_path: Option<String>,

    /// Run lexer only and print the tokens
    #[arg(short, long)]
    lex: bool,

    /// Print multi-line debug output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let source = match &args.input_path {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?,
        None => DEMO_PROGRAM.to_string(),
    };

    // --lex: stop after the lexer
    if args.lex {
        let tokens = lexer::lex(&source).map_err(parser::Error::from)?;
        for token in &tokens {
            println!("{token}");
        }
        return Ok(());
    }

    for stmt in &parser::parse_source(&source)? {
        print_stmt(stmt, args.pretty);
    }
    Ok(())
}

fn print_stmt(stmt: &model::Stmt, pretty: bool) {
    if pretty {
        println!("{stmt:#?}");
    } else {
        println!("{stmt:?}");
    }
}
