//! Counter Team Demo
//!
//! Loads a type chart and a species catalog, then prints a counter team for
//! an opposing lineup given by name, or sampled at random with --random.
//!
//! Usage:
//!   cargo run --example counter_team -- chart.csv pokemon_data.csv Pikachu Gyarados
//!   cargo run --example counter_team -- chart.csv pokemon_data.csv --random

use std::fs;

use anyhow::{Context, Result, bail};
use counterpick_chart::{parse_catalog, parse_chart};
use counterpick_roster::{resolve_names, select_counter_team, typing_of};
use rand::seq::SliceRandom;

const TEAM_SIZE: usize = 6;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: counter_team <chart.csv> <catalog.csv> (--random | <species>...)");
    }

    let chart_text =
        fs::read_to_string(&args[0]).with_context(|| format!("reading {}", args[0]))?;
    let chart = parse_chart(&chart_text)?;
    let catalog_text =
        fs::read_to_string(&args[1]).with_context(|| format!("reading {}", args[1]))?;
    let catalog = parse_catalog(&catalog_text)?;

    let opponents = if args[2] == "--random" {
        let mut rng = rand::thread_rng();
        catalog
            .choose_multiple(&mut rng, TEAM_SIZE)
            .cloned()
            .collect()
    } else {
        resolve_names(&catalog, &args[2..])?
    };

    println!("Opposing team:");
    for row in &opponents {
        println!("  {} ({})", row.name, typing_of(row));
    }

    let team = select_counter_team(&catalog, &chart, &opponents, opponents.len())?;

    println!("\nRecommended typings:");
    for rec in &team.recommendations {
        println!("  {} -> {}", rec.counter, rec.opponent);
    }

    println!("\nCounter team:");
    for member in &team.members {
        println!("  {} ({}, BST {})", member.name, typing_of(member), member.bst());
    }

    Ok(())
}
