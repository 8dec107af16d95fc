use clap::Parser;
use pascalc::errors::PascalResult;
use pascalc::{read, Compiler};
use std::{path::PathBuf, process, time::Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Front end for a reduced Pascal dialect",
    long_about = "Front end for a reduced Pascal dialect.\n\
                 Scans and parses a program, then prints its tokens, its syntax tree\n\
                 or a diagnostic pointing at the first malformed construct.\n\
                 \n\
                 Example usage:\n\
                 pascalc input.pas                 # Check that the program parses\n\
                 pascalc input.pas --tokens        # List tokens with positions\n\
                 pascalc input.pas --ast           # Display abstract syntax tree\n\
                 pascalc input.pas --json          # Dump the tree as JSON\n\
                 pascalc input.pas --check         # Report duplicate declarations"
)]
struct Cli {
    // The path to the program to analyse
    path: PathBuf,

    // Print the token stream
    #[arg(long)]
    tokens: bool,

    // Print the AST as an indented tree
    #[arg(long)]
    ast: bool,

    // Print the AST as JSON
    #[arg(long)]
    json: bool,

    // Run the declaration checker
    #[arg(long)]
    check: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing of each pass
    #[arg(short, long)]
    timing: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fatal(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn run(args: &Cli) -> PascalResult<bool> {
    let source = read(&args.path)?;
    let mut compiler = Compiler::new();
    compiler.set_source(source);

    let lex_start = Instant::now();
    let tokens = match compiler.lexical_analysis() {
        Ok(tokens) => tokens,
        Err(message) => {
            eprintln!("{}", message);
            return Ok(false);
        }
    };
    let lex_time = lex_start.elapsed().as_secs_f64();

    if args.tokens {
        for token in &tokens {
            println!(
                "{:<12} {:<24} {:>4}:{:<4}",
                token.token_type,
                format!("{:?}", token.value),
                token.line,
                token.column
            );
        }
    }

    let parse_start = Instant::now();
    let source = compiler.source().to_string();
    if !compiler.compile(source) {
        for message in compiler.errors() {
            eprintln!("{}", message);
        }
        return Ok(false);
    }
    let parse_time = parse_start.elapsed().as_secs_f64();

    if args.ast {
        if let Some(tree) = compiler.ast_tree() {
            print!("{}", tree);
        }
    }

    if args.json {
        if let Some(value) = compiler.ast_json() {
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(err) => fatal(&format!("Could not render JSON: {}", err)),
            }
        }
    }

    let mut ok = true;
    if args.check {
        for message in compiler.semantic_analysis() {
            eprintln!("{}", message);
            ok = false;
        }
    }

    if args.timing {
        println!("Lexical analysis: {:.6}s ({} tokens)", lex_time, tokens.len());
        println!("Parsing:          {:.6}s", parse_time);
    }
    Ok(ok)
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => {
            if args.verbose {
                println!("{}: no errors", args.path.display());
            }
        }
        Ok(false) => process::exit(1),
        Err(e) => fatal(&format!("pascalc: {}", e)),
    }
}
