//! Console rendering: menu boxes, messages, detail views and the
//! 13-column summary table. Pure presentation — values come from the
//! core already formatted.

use hrdesk_core::employee::{EmployeeRecord, EmployeeSummary};

// Summary table column widths.
const W_NAME: usize = 21;
const W_ID: usize = 11;
const W_GENDER: usize = 10;
const W_TYPE: usize = 12;
const W_STATUS: usize = 10;
const W_DOB: usize = 12;
const W_DOJ: usize = 12;
const W_DOL: usize = 12;
const W_TOT_LEAVES: usize = 14;
const W_AVAILED: usize = 15;
const W_AGENCY: usize = 16;
const W_COLLEGE: usize = 16;
const W_BRANCH: usize = 10;

const COLUMN_WIDTHS: [usize; 13] = [
    W_NAME, W_ID, W_GENDER, W_TYPE, W_STATUS, W_DOB, W_DOJ, W_DOL, W_TOT_LEAVES, W_AVAILED,
    W_AGENCY, W_COLLEGE, W_BRANCH,
];

const HEADERS: [&str; 13] = [
    "Name",
    "ID",
    "Gender",
    "Type",
    "Status",
    "DOB",
    "DOJ",
    "DOL",
    "Total Leaves",
    "Availed Leaves",
    "Agency Name",
    "College",
    "Branch",
];

pub fn info(message: &str) {
    println!("{message}");
}

pub fn error(message: &str) {
    println!("ERROR: {message}");
}

/// Boxed menu: title, numbered options, and the back/exit hint.
pub fn menu(title: &str, options: &[&str], exit_code: i32, is_root: bool) {
    let title_line = format!("       {title}");
    let exit_line = format!(
        "         Press {exit_code} to {}",
        if is_root {
            "Exit"
        } else {
            "go back to previous menu"
        }
    );
    let option_lines: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| format!("       {}. {opt}", i + 1))
        .collect();

    let width = option_lines
        .iter()
        .map(|l| l.len())
        .chain([title_line.len(), exit_line.len()])
        .max()
        .unwrap_or(0)
        + 2;

    let rule = "-".repeat(width);
    println!("{rule}");
    println!("|{title_line:<pad$}|", pad = width - 1);
    println!("{rule}");
    for line in &option_lines {
        println!("|{line:<pad$}|", pad = width - 1);
    }
    println!("|{exit_line:<pad$}|", pad = width - 1);
    println!("{rule}");
}

fn details_title(record: &EmployeeRecord) -> &'static str {
    if matches!(record, EmployeeRecord::Resigned { .. }) {
        "Archived Employee Details"
    } else {
        "Employee Details"
    }
}

/// Verbose multi-line view of one record.
pub fn full_details(record: &EmployeeRecord) {
    println!("\n--- {} ---", details_title(record));
    for (key, value) in record.detail_fields() {
        println!("  {key:<16}: {value}");
    }
    println!("------------------------");
}

fn row_separator() {
    for width in COLUMN_WIDTHS {
        print!("+{}", "-".repeat(width));
    }
    println!("+");
}

fn print_cells(cells: &[String; 13]) {
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        print!("|{cell:<width$}");
    }
    println!("|");
}

fn opt_int(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Greedy word wrap; words longer than the width are hard-split.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut rest = word;
            while rest.len() > width {
                let (head, tail) = rest.split_at(width);
                lines.push(head.to_string());
                rest = tail;
            }
            line = rest.to_string();
            continue;
        }
        if line.is_empty() {
            line = word.to_string();
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    lines.push(line);
    lines
}

/// Print the tabular summary view. Absent variant fields show as "-";
/// long names wrap onto continuation lines within their row.
pub fn summary_table(rows: &[EmployeeSummary], title: &str) {
    println!("\n--- {title} ---");
    if rows.is_empty() {
        println!("No records found.");
        return;
    }

    row_separator();
    print_cells(&HEADERS.map(String::from));
    row_separator();

    for row in rows {
        let name_lines = wrap_to_width(&row.name, W_NAME);
        for (i, name_part) in name_lines.iter().enumerate() {
            let first = i == 0;
            let take = |s: &str| if first { s.to_string() } else { String::new() };
            print_cells(&[
                name_part.clone(),
                take(&row.id),
                take(&row.gender),
                take(&row.employee_type),
                take(&row.status),
                take(&row.dob),
                take(&row.doj),
                take(&row.dol),
                if first { opt_int(row.total_leaves) } else { String::new() },
                if first { opt_int(row.availed_leaves) } else { String::new() },
                if first { opt_str(&row.agency) } else { String::new() },
                if first { opt_str(&row.college) } else { String::new() },
                if first { opt_str(&row.branch) } else { String::new() },
            ]);
        }
        row_separator();
    }
}
