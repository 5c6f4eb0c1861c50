//! Single construction point for employee records.
//!
//! Maps a discriminated argument bundle to the right variant. Resigned
//! status short-circuits to the archive variant regardless of the
//! requested type. Pure function of its input; fields irrelevant to
//! the chosen variant are ignored.

use crate::employee::{
    Agency, Branch, College, EmployeeCore, EmployeeRecord, EmployeeType, Gender, Status,
    MAX_LEAVES_PER_YEAR, MIN_LEAVES,
};

/// Everything needed to construct any employee variant. Callers fill
/// the variant fields that apply and leave the rest at their defaults.
#[derive(Debug, Clone)]
pub struct NewEmployeeArgs {
    pub name: String,
    pub id: String,
    pub gender: Gender,
    pub dob: String,
    pub doj: String,
    /// Date of leaving. Caller contract: always present for resigned
    /// records; optional for contractor/intern.
    pub dol: Option<String>,
    pub employee_type: EmployeeType,
    pub status: Status,
    pub leaves: i32,
    pub agency: Agency,
    pub college: College,
    pub branch: Branch,
}

pub struct EmployeeFactory;

impl EmployeeFactory {
    pub fn build(args: NewEmployeeArgs) -> EmployeeRecord {
        let core = EmployeeCore {
            name: args.name,
            id: args.id,
            gender: args.gender,
            dob: args.dob,
            doj: args.doj,
            status: args.status,
        };

        if args.status == Status::Resigned {
            return EmployeeRecord::Resigned {
                core,
                last_type: args.employee_type,
                dol: args.dol.unwrap_or_else(|| "-".into()),
            };
        }

        match args.employee_type {
            EmployeeType::FullTime => EmployeeRecord::FullTime {
                core,
                leaves_avail: args.leaves.clamp(MIN_LEAVES, MAX_LEAVES_PER_YEAR),
            },
            EmployeeType::Contractor => EmployeeRecord::Contractor {
                core,
                agency: args.agency,
                dol: args.dol,
            },
            EmployeeType::Intern => EmployeeRecord::Intern {
                core,
                college: args.college,
                branch: args.branch,
                dol: args.dol,
            },
        }
    }
}
