//! Console input prompting.
//!
//! Every reader re-prompts on malformed input, so the values handed to
//! the manager are already validated. EOF on stdin surfaces as an
//! error and unwinds the menu loop.

use anyhow::{bail, Result};
use hrdesk_core::{dates, employee::Gender, manager::ManualEmployeeInput};
use std::io::{self, BufRead, Write};

use crate::render;

/// Read one trimmed line from stdin, prompting first.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Read a menu choice in [min, max] or the back/exit code, re-prompting
/// on anything else.
pub fn menu_choice(min: i32, max: i32, back: i32) -> Result<i32> {
    loop {
        let line = prompt_line("Your Choice: ")?;
        if let Ok(value) = line.parse::<i32>() {
            if value == back || (min..=max).contains(&value) {
                return Ok(value);
            }
        }
        println!("Invalid input. Enter {min}-{max} or {back}.");
    }
}

/// Read any integer, re-prompting until one parses.
pub fn prompt_i64(prompt: &str) -> Result<i64> {
    loop {
        let line = prompt_line(prompt)?;
        if let Ok(value) = line.parse::<i64>() {
            return Ok(value);
        }
        render::error("Invalid number.");
    }
}

fn prompt_gender() -> Result<Gender> {
    loop {
        let line = prompt_line("Enter Gender (M/F): ")?;
        if let Some(gender) = Gender::parse(&line) {
            return Ok(gender);
        }
        render::error("Invalid gender. Please enter M or F.");
    }
}

fn prompt_name() -> Result<String> {
    loop {
        let name = prompt_line("Enter Name: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
        render::error("Name cannot be empty.");
    }
}

fn prompt_date(label: &str) -> Result<String> {
    loop {
        let date = prompt_line(&format!("Enter {label} (DD-MM-YYYY): "))?;
        if dates::is_valid_date(&date) {
            return Ok(date);
        }
        render::error("Invalid date format. Please use DD-MM-YYYY.");
    }
}

/// Collect the manual-add fields, enforcing DOJ >= DOB + 18 years.
pub fn prompt_manual_inputs() -> Result<ManualEmployeeInput> {
    let gender = prompt_gender()?;
    let name = prompt_name()?;
    let dob = prompt_date("Date of Birth")?;
    let doj = loop {
        let doj = prompt_date("Date of Joining")?;
        if dates::is_at_least_years_apart(&dob, &doj, dates::MIN_WORKING_AGE_YEARS)
            .unwrap_or(false)
        {
            break doj;
        }
        render::error(
            "Date of Joining must be at least 18 years after Date of Birth. Please re-enter DOJ.",
        );
    };
    Ok(ManualEmployeeInput {
        gender,
        name,
        dob,
        doj,
    })
}
