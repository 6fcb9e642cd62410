use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

use vigor_domain::{Category, Move, Plan, Service};

use crate::cli::{Cli, Commands};

mod cli;
mod logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let service = Service::builtin();

    match cli.command {
        Commands::List {
            search,
            category,
            json,
        } => {
            let moves = service.filter(&search, &category);

            if json {
                println!("{}", serde_json::to_string_pretty(&moves)?);
            } else if moves.is_empty() {
                println!("No matching moves");
            } else {
                for m in moves {
                    println!("{}  {}", m.category.label().cyan(), m.name.as_str().bold());
                }
            }
        }
        Commands::Show { name, json } => {
            let Some(m) = service.find_move(&name) else {
                bail!("No move named {name:?}");
            };

            if json {
                println!("{}", serde_json::to_string_pretty(m)?);
            } else {
                print_move(m);
            }
        }
        Commands::Plan { json } => {
            let plan = service.generate_plan();

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
        }
    }

    Ok(())
}

fn print_move(m: &Move) {
    println!("{}", m.name.as_str().bold());
    println!("Category: {}", m.category);
    println!("Image: {}", m.image);
    println!();
    println!("{}", m.description);
}

fn print_plan(plan: &Plan) {
    println!("{}", "Your Workout Plan".bold());

    for (exercise, category) in plan.exercises().iter().zip(Category::iter()) {
        println!(
            "{}  {} ({})",
            category.label().cyan(),
            exercise.name.as_str(),
            exercise.image
        );
    }
}
