//! The interactive menu tree.
//!
//! Each submenu loops until the user enters the back code (-1). All
//! mutation goes through the EmployeeManager; this module only routes
//! choices and prints outcomes.

use anyhow::Result;
use hrdesk_core::{
    employee::{EmployeeType, Gender, Status, MAX_LEAVES_PER_YEAR},
    manager::{EmployeeManager, NewEmployeeSource},
};

use crate::{input, render};

const BACK: i32 = -1;

/// Run the main menu loop until the user exits. Always returns Ok on a
/// clean exit; errors only surface when stdin closes.
pub fn run(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Employee Management System",
            &[
                "Add an Employee",
                "Add 'n' Random Employees",
                "Remove an Employee",
                "Get Employee Details",
                "Others",
            ],
            BACK,
            true,
        );
        match input::menu_choice(1, 5, BACK)? {
            1 => add_menu(manager)?,
            2 => add_multiple(manager)?,
            3 => remove_menu(manager)?,
            4 => details_menu(manager)?,
            5 => operations_menu(manager)?,
            BACK => {
                render::info("Exiting system. Goodbye!");
                return Ok(());
            }
            _ => render::error("Invalid choice. Please try again."),
        }
    }
}

fn add_menu(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Add an Employee:",
            &["Add an Employee at Random", "Add an Employee (F/C/I)"],
            BACK,
            false,
        );
        match input::menu_choice(1, 2, BACK)? {
            1 => {
                let employee_type = manager.random_employee_type();
                add_employee(manager, employee_type, NewEmployeeSource::Random);
            }
            2 => specific_add_menu(manager)?,
            _ => return Ok(()),
        }
    }
}

fn specific_add_menu(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Add an Employee (F/C/I):",
            &[
                "Add Full-Time Employee",
                "Add Contractor Employee",
                "Add Intern Employee",
            ],
            BACK,
            false,
        );
        let employee_type = match input::menu_choice(1, 3, BACK)? {
            1 => EmployeeType::FullTime,
            2 => EmployeeType::Contractor,
            3 => EmployeeType::Intern,
            _ => return Ok(()),
        };
        let manual = input::prompt_manual_inputs()?;
        add_employee(manager, employee_type, NewEmployeeSource::Manual(manual));
    }
}

fn add_employee(manager: &mut EmployeeManager, employee_type: EmployeeType, source: NewEmployeeSource) {
    match manager.add_employee(employee_type, source) {
        Ok(receipt) if receipt.status == Status::Resigned => render::info(&format!(
            "\nCreated and archived a Resigned {}: {} ({}).",
            receipt.employee_type, receipt.name, receipt.id
        )),
        Ok(receipt) => render::info(&format!(
            "\nAdded new {}: {} ({}) with status: {}.",
            receipt.employee_type, receipt.name, receipt.id, receipt.status
        )),
        Err(err) => {
            log::warn!("add rejected: {err}");
            render::error(&err.to_string());
        }
    }
}

fn add_multiple(manager: &mut EmployeeManager) -> Result<()> {
    let count = input::prompt_i64("\nEnter how many random employees to create: ")?;
    match manager.add_multiple_random(count) {
        Ok(created) => render::info(&format!("Created {created} random employees.")),
        Err(err) => {
            log::warn!("bulk add of {count} rejected: {err}");
            render::error(&err.to_string());
        }
    }
    Ok(())
}

fn remove_menu(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Remove Employee:",
            &[
                "Remove Full-Time Employee",
                "Remove Contractor Employee",
                "Remove Intern Employee",
            ],
            BACK,
            false,
        );
        let employee_type = match input::menu_choice(1, 3, BACK)? {
            1 => EmployeeType::FullTime,
            2 => EmployeeType::Contractor,
            3 => EmployeeType::Intern,
            _ => return Ok(()),
        };
        let id = input::prompt_line(&format!(
            "\nEnter {employee_type} Employee ID to remove: "
        ))?;
        match manager.resign(&id, employee_type) {
            Ok(name) => render::info(&format!("Employee {name} ({id}) has been resigned.")),
            Err(err) => {
                log::warn!("resign of {id} failed: {err}");
                render::error(&err.to_string());
            }
        }
    }
}

fn details_menu(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Get Employee Details:",
            &[
                "All Employees Summary",
                "Employee Summary (F/C/I)",
                "Employee Summary (M/F)",
                "Employee Summary (A/I/R)",
                "Display Employee Details",
            ],
            BACK,
            false,
        );
        match input::menu_choice(1, 5, BACK)? {
            1 => render::summary_table(&manager.summary_all(), "All Employees Summary"),
            2 => type_summary_menu(manager)?,
            3 => gender_summary_menu(manager)?,
            4 => status_summary_menu(manager)?,
            5 => {
                let id = input::prompt_line("\nEnter Employee ID to display details: ")?;
                show_matches(&manager.search_by_id(&id), &format!("Employee ID {id} not found."));
            }
            _ => return Ok(()),
        }
    }
}

fn type_summary_menu(manager: &EmployeeManager) -> Result<()> {
    render::menu(
        "Select Employee Type:",
        &["Full-Time", "Contractor", "Intern"],
        BACK,
        false,
    );
    let employee_type = match input::menu_choice(1, 3, BACK)? {
        1 => EmployeeType::FullTime,
        2 => EmployeeType::Contractor,
        3 => EmployeeType::Intern,
        _ => return Ok(()),
    };
    render::summary_table(
        &manager.summary_by_type(employee_type),
        &format!("Summary for Type: {employee_type}"),
    );
    Ok(())
}

fn gender_summary_menu(manager: &EmployeeManager) -> Result<()> {
    render::menu("Select Gender:", &["Male", "Female"], BACK, false);
    let gender = match input::menu_choice(1, 2, BACK)? {
        1 => Gender::Male,
        2 => Gender::Female,
        _ => return Ok(()),
    };
    render::summary_table(
        &manager.summary_by_gender(gender),
        &format!("Summary for Gender: {gender}"),
    );
    Ok(())
}

fn status_summary_menu(manager: &EmployeeManager) -> Result<()> {
    render::menu(
        "Select Employment Status:",
        &["Active", "Inactive", "Resigned"],
        BACK,
        false,
    );
    let status = match input::menu_choice(1, 3, BACK)? {
        1 => Status::Active,
        2 => Status::Inactive,
        3 => Status::Resigned,
        _ => return Ok(()),
    };
    render::summary_table(
        &manager.summary_by_status(status),
        &format!("Summary for Status: {status}"),
    );
    Ok(())
}

fn operations_menu(manager: &mut EmployeeManager) -> Result<()> {
    loop {
        render::menu(
            "Do something else:",
            &[
                "Add 'n' number of leaves to all the Full-Time employees",
                "Convert an Intern to Full-Time employee.",
                "Convert a Contractor to Full-Time employee.",
                "Search an Employee by ID",
                "Search an Employee by Name",
            ],
            BACK,
            false,
        );
        match input::menu_choice(1, 5, BACK)? {
            1 => add_leaves(manager)?,
            2 => {
                let id = input::prompt_line("\nEnter Intern's Employee ID to convert: ")?;
                match manager.convert_intern_to_full_time(&id) {
                    Ok(name) => render::info(&format!(
                        "Intern {name} ({id}) has been converted to Full-Time."
                    )),
                    Err(err) => {
                        log::warn!("intern conversion of {id} failed: {err}");
                        render::error(&err.to_string());
                    }
                }
            }
            3 => {
                let id = input::prompt_line("\nEnter Contractor's Employee ID to convert: ")?;
                match manager.convert_contractor_to_full_time(&id) {
                    Ok(name) => render::info(&format!(
                        "Contractor {name} ({id}) has been converted to Full-Time."
                    )),
                    Err(err) => {
                        log::warn!("contractor conversion of {id} failed: {err}");
                        render::error(&err.to_string());
                    }
                }
            }
            4 => {
                let id = input::prompt_line("\nEnter Employee ID to search: ")?;
                show_matches(&manager.search_by_id(&id), &format!("Employee ID {id} not found."));
            }
            5 => {
                let name =
                    input::prompt_line("\nEnter Employee Name to search (case-sensitive): ")?;
                show_matches(
                    &manager.search_by_name(&name),
                    &format!("Employee Name \"{name}\" not found."),
                );
            }
            _ => return Ok(()),
        }
    }
}

fn add_leaves(manager: &mut EmployeeManager) -> Result<()> {
    let n = input::prompt_i64("\nEnter number of leaves to add to all Full-Time employees: ")?;
    let n = n.min(MAX_LEAVES_PER_YEAR as i64) as i32;
    match manager.add_leaves_to_all_full_time(n) {
        Ok(0) => render::info("No full-time employees to update."),
        Ok(updated) => render::info(&format!(
            "Added {n} leaves to {updated} full-time employee(s)."
        )),
        Err(err) => {
            log::warn!("bulk leave add of {n} rejected: {err}");
            render::error(&err.to_string());
        }
    }
    Ok(())
}

fn show_matches(matches: &[&hrdesk_core::employee::EmployeeRecord], not_found: &str) {
    if matches.is_empty() {
        render::error(not_found);
        return;
    }
    for record in matches {
        render::full_details(record);
    }
}
