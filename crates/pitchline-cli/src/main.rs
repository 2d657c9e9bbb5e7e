//! pitchline - CLI for grouped point placement along a segment
//!
//! Usage:
//!   pitchline                               Run the demo
//!   pitchline group --from X,Y --to X,Y     Group a segment
//!   pitchline recipe <recipe.yaml>          Group segments from a recipe

use std::env;

mod cli;

use cli::{cmd_demo, cmd_group, cmd_recipe};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pitchline");
    let command = args.get(1).map(String::as_str).unwrap_or("demo");
    let rest = args.get(2..).unwrap_or(&[]);

    let result = match command {
        "demo" => cmd_demo(),
        "group" => cmd_group(rest),
        "recipe" => cmd_recipe(rest),
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(())
        }
        other => {
            print_usage(program);
            Err(format!("Unknown command: {}", other))
        }
    };

    if let Err(e) = result {
        log::debug!("command '{}' failed", command);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("pitchline - evenly spaced point groups along a line segment");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    {}                                Run the demo (0,0)-(10,10), 5/2/1", program);
    eprintln!("    {} group --from X,Y --to X,Y      Group a segment", program);
    eprintln!("    {} recipe <recipe.yaml>           Group segments listed in YAML", program);
    eprintln!("    {} help                           Show this help", program);
    eprintln!();
    eprintln!("Run '{} group --help' or '{} recipe --help' for command options.", program, program);
    eprintln!("Set RUST_LOG=debug for diagnostics.");
}
