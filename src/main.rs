use anyhow::{Context, Result};
use blocktree::graph::render_digraph;
use blocktree::lexer::{LexerError, Scanner};
use blocktree::parser::{parse_source, Node};
use clap::{Args, Parser as ClapParser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Program used when neither a file nor inline source is given
const SAMPLE_PROGRAM: &str = "{ x = 3 + 4 * (2 - 1); }";

#[derive(ClapParser)]
#[command(name = "blocktree")]
#[command(about = "Parse block programs and export their syntax tree to Graphviz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Input file path
    #[arg(value_name = "FILE", conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Inline source text instead of a file
    #[arg(short = 'e', long = "source", value_name = "SOURCE")]
    source: Option<String>,
}

impl Input {
    /// Source text plus a name for diagnostics
    fn load(&self) -> Result<(String, String)> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read file '{}'", path.display()))?;
            return Ok((text, path.display().to_string()));
        }
        if let Some(text) = &self.source {
            return Ok((text.clone(), "<inline>".to_string()));
        }
        Ok((SAMPLE_PROGRAM.to_string(), "<sample>".to_string()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input and print tokens
    Lex {
        #[command(flatten)]
        input: Input,
    },
    /// Parse the input and print the syntax tree
    Parse {
        #[command(flatten)]
        input: Input,
    },
    /// Parse the input and write the syntax tree as a DOT graph
    Dot {
        #[command(flatten)]
        input: Input,

        /// Output file path
        #[arg(short, long, value_name = "OUTPUT", default_value = "syntax_tree.dot")]
        output: PathBuf,

        /// Print the graph to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Name of the generated digraph
        #[arg(long, value_name = "NAME", default_value = "syntax_tree")]
        graph_name: String,

        /// First node identity
        #[arg(long, value_name = "N", default_value = "0")]
        start_id: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { input } => lex_input(&input)?,
        Commands::Parse { input } => parse_input(&input)?,
        Commands::Dot {
            input,
            output,
            stdout,
            graph_name,
            start_id,
        } => dot_input(&input, (!stdout).then_some(output.as_path()), &graph_name, start_id)?,
    }

    Ok(())
}

fn report_lex_errors(name: &str, errors: &[LexerError]) {
    for error in errors {
        warn!("{name}: {error}");
    }
}

/// Load and parse the input, logging recovered lexical errors
fn parse_loaded(input: &Input) -> Result<(Node, String)> {
    let (text, name) = input.load()?;

    let parsed = match parse_source(&text) {
        Ok(parsed) => parsed,
        Err(failure) => {
            report_lex_errors(&name, &failure.lex_errors);
            return Err(failure).with_context(|| format!("failed to parse '{name}'"));
        }
    };
    report_lex_errors(&name, &parsed.lex_errors);

    Ok((parsed.root, name))
}

fn lex_input(input: &Input) -> Result<()> {
    let (text, name) = input.load()?;

    let mut scanner = Scanner::new(&text);
    let tokens: Vec<_> = scanner.by_ref().collect();
    report_lex_errors(&name, scanner.errors());

    println!("Tokens:");
    println!("-------");
    for token in &tokens {
        println!(
            "{}:{}:{} {} {}",
            name,
            token.pos.line,
            token.pos.column,
            token.kind.name(),
            token.lexeme
        );
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_input(input: &Input) -> Result<()> {
    let (root, _) = parse_loaded(input)?;

    print!("{root}");

    Ok(())
}

fn dot_input(
    input: &Input,
    output: Option<&std::path::Path>,
    graph_name: &str,
    start_id: usize,
) -> Result<()> {
    let (root, name) = parse_loaded(input)?;

    let graph = render_digraph(graph_name, &root, start_id)
        .with_context(|| format!("failed to number the graph for '{name}'"))?;

    match output {
        Some(path) => {
            fs::write(path, &graph)
                .with_context(|| format!("failed to write graph to '{}'", path.display()))?;
            info!(
                "wrote {} nodes for '{}' to {}",
                root.count(),
                name,
                path.display()
            );
            println!("DOT graph written to: {}", path.display());
        }
        None => println!("{graph}"),
    }

    Ok(())
}
