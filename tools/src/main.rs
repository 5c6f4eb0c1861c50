//! hr-console: interactive menu front end for the employee desk.
//!
//! Usage:
//!   hr-console
//!   hr-console --seed 12345

use anyhow::Result;
use hrdesk_core::{manager::EmployeeManager, rng::DeskRng};
use std::env;

mod input;
mod menu;
mod render;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rng = match parse_seed(&args) {
        Some(seed) => DeskRng::from_seed(seed),
        None => DeskRng::from_entropy(),
    };

    let mut manager = EmployeeManager::new(rng);
    menu::run(&mut manager)?;
    Ok(())
}

fn parse_seed(args: &[String]) -> Option<u64> {
    args.windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok())
}
