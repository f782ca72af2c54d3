use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "reckon", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: ReckonCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReckonCommand {
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    Parse {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "sexpr")]
        format: ProgramFormat,
    },
    Run {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ErrorFormat,
    },
    Repl,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
    Pretty,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ProgramFormat {
    Debug,
    #[clap(name = "sexpr")]
    SExpr,
    Pretty,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Basic,
    Pretty,
}

const STATIC_ERROR_CODE: u8 = 65;
const RUNTIME_ERROR_CODE: u8 = 70;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CLArgs::parse();
    match args.routine {
        ReckonCommand::Tokenize { path, format } => {
            eprintln!("Tokenizing {:?}...", path);
            let src = read_to_string(&path)?;
            tokenize(&src, &path, &format)
        }
        ReckonCommand::Parse { path, format } => {
            eprintln!("Parsing {:?}...", path);
            let src = read_to_string(&path)?;
            parse(&src, &path, &format)
        }
        ReckonCommand::Run { path, format } => {
            eprintln!("Running {:?}...", path);
            let src = read_to_string(&path)?;
            run(&src, &path, &format)
        }
        ReckonCommand::Repl => repl(),
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn tokenize(src: &str, path: &Path, format: &TokenFormat) -> Result<ExitCode> {
    use reckon::lexer::formatter::{
        BasicFormatter, DebugFormatter, PrettyFormatter, TokenFormatter,
    };
    use reckon::lexer::{Lexer, TokenKind};

    let path = display_path(path);
    let mut scanner = Lexer::new(src);
    let formatter: Box<dyn TokenFormatter + '_> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
        TokenFormat::Pretty => Box::new(PrettyFormatter::new(src, &path)),
    };
    let mut succeeded = true;
    loop {
        match scanner.next_token() {
            Ok(token) => {
                println!("{}", formatter.format(&token));
                if matches!(token.kind, TokenKind::EndOfInput) {
                    break;
                }
            }
            Err(error) => {
                eprintln!("{}", formatter.format_lexical_error(&error));
                succeeded = false;
            }
        };
    }

    if succeeded {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(STATIC_ERROR_CODE))
    }
}

fn parse(src: &str, path: &Path, format: &ProgramFormat) -> Result<ExitCode> {
    use reckon::parser::formatter::{
        DebugFormatter, PrettyFormatter, ProgramFormatter, SExpressionFormatter,
    };

    let path = display_path(path);
    let formatter: Box<dyn ProgramFormatter + '_> = match format {
        ProgramFormat::Debug => Box::new(DebugFormatter),
        ProgramFormat::SExpr => Box::new(SExpressionFormatter),
        ProgramFormat::Pretty => Box::new(PrettyFormatter::new(src, &path)),
    };
    match reckon::parse(src) {
        Ok(program) => {
            println!("{}", formatter.format(&program));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", formatter.format_error(&error));
            Ok(ExitCode::from(STATIC_ERROR_CODE))
        }
    }
}

fn run(src: &str, path: &Path, format: &ErrorFormat) -> Result<ExitCode> {
    use reckon::interpreter::{evaluate, Environment};
    use reckon::parser::formatter::{PrettyFormatter, ProgramFormatter, SExpressionFormatter};
    use reckon::value::formatter::{BasicFormatter, ValueFormatter};

    let path = display_path(path);
    let parser_formatter: Box<dyn ProgramFormatter + '_> = match format {
        ErrorFormat::Basic => Box::new(SExpressionFormatter),
        ErrorFormat::Pretty => Box::new(PrettyFormatter::new(src, &path)),
    };
    let value_formatter = BasicFormatter;

    let program = match reckon::parse(src) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", parser_formatter.format_error(&error));
            return Ok(ExitCode::from(STATIC_ERROR_CODE));
        }
    };

    let mut environment = Environment::global();
    match evaluate(&program, &mut environment) {
        Ok(value) => {
            println!("{}", value_formatter.format(&value));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", value_formatter.format_error(&error));
            Ok(ExitCode::from(RUNTIME_ERROR_CODE))
        }
    }
}

fn repl() -> Result<ExitCode> {
    use reckon::interpreter::context::StdioContext;
    use reckon::repl::Repl;

    let mut session = Repl::new(StdioContext);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if !session.interact(&line) {
            break;
        }
    }
    Ok(ExitCode::SUCCESS)
}
