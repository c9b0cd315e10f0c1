//! Model Sketch CLI
//!
//! Usage:
//!   model-sketch [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -d, --debug              Dump placement and routing, draw anchor markers
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use model_sketch::{render_with_config, RenderConfig, Stylesheet};

#[derive(Parser)]
#[command(name = "model-sketch")]
#[command(about = "Diagram layout engine for model elements and connectors")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: dump placement and routing, draw anchor markers
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);
    match render_with_config(&source, config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Model Sketch - diagram layout engine for model elements

USAGE:
    model-sketch [OPTIONS] [FILE]
    cat diagram.toml | model-sketch

OPTIONS:
    -s, --stylesheet   Custom color palette (TOML file)
    -d, --debug        Dump placement and routing, draw anchor markers
    -h, --help         Print help

QUICK START:
    model-sketch diagram.toml > output.svg

A diagram document declares elements and connectors:

    [[element]]
    name = "Order"
    color = "box-1"
    x = 0
    y = 0

    [[element]]
    name = "Invoice"
    x = 300
    y = 200

    [[connector]]
    from = "Order"
    to = "Invoice"
    label = "billed as"

Elements are rectangles sized from their names; connectors are routed
orthogonally between free anchor points on the element borders, with the
arrowhead at the target element."#
    );
}
