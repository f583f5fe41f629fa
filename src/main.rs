use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use analyser::{
    display_error,
    errors::errors::FaultKind,
    lexer::lexer::Lexer,
    parser::parser::analyse,
    trace::{
        render::IndentedTrace,
        trace::{NullTrace, TraceSink},
    },
};
use clap::Parser;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "analyser")]
#[command(about = "Syntax and semantic analyser for begin/end statement programs")]
#[command(version)]
struct Cli {
    /// Program to analyse (use '-' for stdin)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Only report the outcome, without the parse trace
    #[arg(short, long)]
    quiet: bool,

    /// Log scope and token activity at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let file_name = cli.input.to_string_lossy().to_string();

    let source = match read_input(&cli.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", file_name, error);
            return ExitCode::from(2);
        }
    };
    debug!("read {} bytes from {}", source.len(), file_name);

    let mut lexer = Lexer::new(source.as_str());

    let mut trace = IndentedTrace::new();
    let mut quiet = NullTrace;
    let sink: &mut dyn TraceSink = if cli.quiet { &mut quiet } else { &mut trace };

    let result = analyse(&mut lexer, sink);

    if !cli.quiet {
        print!("{}", trace.as_str());
    }

    match result {
        Ok(()) => {
            info!("{} analysed successfully", file_name);
            println!("{}: analysis successful", file_name);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", display_error(&error, &source, &file_name));
            if error.root_cause().kind() == FaultKind::Io {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    let mut source = String::new();

    if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut source)?;
    } else {
        File::open(path)?.read_to_string(&mut source)?;
    }

    Ok(source)
}
