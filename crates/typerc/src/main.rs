use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use littletyper::{infer_type, parse_context};

#[derive(Parser, Debug)]
#[command(name = "typerc")]
#[command(about = "Structural type inference over name : type declaration contexts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a context file and list its declarations
    Context { file: PathBuf },
    /// Infer the type of an expression under a context file
    Infer { file: PathBuf, expression: String },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Context { file } => {
            let src = fs::read_to_string(&file).expect("failed to read file");
            match parse_context(&src) {
                Ok(context) => {
                    println!("Context OK: {} declarations", context.len());
                    let mut names: Vec<_> = context.keys().collect();
                    names.sort();
                    for name in names {
                        println!("  {} : {}", name, context[name]);
                    }
                }
                Err(e) => {
                    eprintln!("Context error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Infer { file, expression } => {
            let src = fs::read_to_string(&file).expect("failed to read file");
            match infer_type(&src, &expression) {
                Ok(ty) => println!("{}", ty),
                Err(e) => {
                    eprintln!("Inference error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
