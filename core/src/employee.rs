//! The employee record model.
//!
//! One employee is one `EmployeeRecord` value: a closed tagged union of
//! the three working variants plus the resigned archive variant. Shared
//! fields live in `EmployeeCore`; variant behaviour (leave handling,
//! summary projection) dispatches by pattern match.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{DateString, EmployeeId};

/// Annual leave ceiling for full-time employees.
pub const MAX_LEAVES_PER_YEAR: i32 = 22;
/// Leave balance floor.
pub const MIN_LEAVES: i32 = 0;
/// Balance a converted or manually added full-timer starts with.
pub const DEFAULT_LEAVES: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Accepts "m"/"male"/"f"/"female" in any case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeType {
    FullTime,
    Contractor,
    Intern,
}

impl EmployeeType {
    pub const ALL: [EmployeeType; 3] = [Self::FullTime, Self::Contractor, Self::Intern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::Contractor => "Contractor",
            Self::Intern => "Intern",
        }
    }

    /// One-letter ID suffix: F/C/I.
    pub fn id_suffix(&self) -> char {
        match self {
            Self::FullTime => 'F',
            Self::Contractor => 'C',
            Self::Intern => 'I',
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Resigned,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Resigned => "Resigned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agency {
    #[default]
    Avengers,
    JusticeLeague,
    XMen,
}

impl Agency {
    pub const ALL: [Agency; 3] = [Self::Avengers, Self::JusticeLeague, Self::XMen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avengers => "Avengers",
            Self::JusticeLeague => "Justice League",
            Self::XMen => "X-Men",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum College {
    #[default]
    IitDelhi,
    IitMumbai,
    IitKanpur,
    IitHyderabad,
    NitWarangal,
    NitTiruchi,
    IiitHyderabad,
}

impl College {
    pub const ALL: [College; 7] = [
        Self::IitDelhi,
        Self::IitMumbai,
        Self::IitKanpur,
        Self::IitHyderabad,
        Self::NitWarangal,
        Self::NitTiruchi,
        Self::IiitHyderabad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IitDelhi => "IIT Delhi",
            Self::IitMumbai => "IIT Mumbai",
            Self::IitKanpur => "IIT Kanpur",
            Self::IitHyderabad => "IIT Hyderabad",
            Self::NitWarangal => "NIT Warangal",
            Self::NitTiruchi => "NIT Tiruchi",
            Self::IiitHyderabad => "IIIT Hyderabad",
        }
    }
}

impl fmt::Display for College {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    #[default]
    Cse,
    Csit,
    Ece,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Self::Cse, Self::Csit, Self::Ece];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::Csit => "CSIT",
            Self::Ece => "ECE",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields common to every employee variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCore {
    pub name: String,
    pub id: EmployeeId,
    pub gender: Gender,
    pub dob: DateString,
    pub doj: DateString,
    pub status: Status,
}

/// One employee's stored data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EmployeeRecord {
    FullTime {
        core: EmployeeCore,
        leaves_avail: i32,
    },
    Contractor {
        core: EmployeeCore,
        agency: Agency,
        /// Materialized only when the record resigns.
        dol: Option<DateString>,
    },
    Intern {
        core: EmployeeCore,
        college: College,
        branch: Branch,
        /// Materialized only when the record resigns.
        dol: Option<DateString>,
    },
    /// Archived terminal state. Variant-specific fields are dropped on
    /// archival; only the last-known type and the fixed date of leaving
    /// are retained.
    Resigned {
        core: EmployeeCore,
        last_type: EmployeeType,
        dol: DateString,
    },
}

/// A flattened, printable projection of one record. Fields that do not
/// apply to the variant are `None` and rendered as "-" by the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub name: String,
    pub id: String,
    pub gender: String,
    pub employee_type: String,
    pub status: String,
    pub dob: String,
    pub doj: String,
    pub dol: String,
    pub total_leaves: Option<i32>,
    pub availed_leaves: Option<i32>,
    pub agency: Option<String>,
    pub college: Option<String>,
    pub branch: Option<String>,
}

impl EmployeeRecord {
    pub fn core(&self) -> &EmployeeCore {
        match self {
            Self::FullTime { core, .. }
            | Self::Contractor { core, .. }
            | Self::Intern { core, .. }
            | Self::Resigned { core, .. } => core,
        }
    }

    pub fn name(&self) -> &str {
        &self.core().name
    }

    pub fn id(&self) -> &str {
        &self.core().id
    }

    pub fn gender(&self) -> Gender {
        self.core().gender
    }

    pub fn status(&self) -> Status {
        self.core().status
    }

    /// The working type, or the last-known type for archived records
    /// (so type-filtered summaries still include them).
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Self::FullTime { .. } => EmployeeType::FullTime,
            Self::Contractor { .. } => EmployeeType::Contractor,
            Self::Intern { .. } => EmployeeType::Intern,
            Self::Resigned { last_type, .. } => *last_type,
        }
    }

    /// Date of leaving, if one has been materialized for this variant.
    pub fn date_of_leaving(&self) -> Option<&str> {
        match self {
            Self::FullTime { .. } => None,
            Self::Contractor { dol, .. } | Self::Intern { dol, .. } => dol.as_deref(),
            Self::Resigned { dol, .. } => Some(dol),
        }
    }

    /// Current leave balance; full-time only.
    pub fn leave_balance(&self) -> Option<i32> {
        match self {
            Self::FullTime { leaves_avail, .. } => Some(*leaves_avail),
            _ => None,
        }
    }

    /// Adjust the leave balance by `n` (may be negative), clamped to
    /// [MIN_LEAVES, MAX_LEAVES_PER_YEAR]. No-op for every other variant.
    pub fn add_leaves(&mut self, n: i32) {
        if let Self::FullTime { leaves_avail, .. } = self {
            *leaves_avail = (*leaves_avail + n).clamp(MIN_LEAVES, MAX_LEAVES_PER_YEAR);
        }
    }

    /// Normalized summary row for the tabular views. The date of
    /// leaving is shown only once the record is resigned.
    pub fn to_summary(&self) -> EmployeeSummary {
        let core = self.core();
        let dol = if core.status == Status::Resigned {
            self.date_of_leaving().unwrap_or("-").to_string()
        } else {
            "-".to_string()
        };
        let mut summary = EmployeeSummary {
            name: core.name.clone(),
            id: core.id.clone(),
            gender: core.gender.to_string(),
            employee_type: self.employee_type().to_string(),
            status: core.status.to_string(),
            dob: core.dob.clone(),
            doj: core.doj.clone(),
            dol,
            total_leaves: None,
            availed_leaves: None,
            agency: None,
            college: None,
            branch: None,
        };
        match self {
            Self::FullTime { leaves_avail, .. } => {
                summary.total_leaves = Some(MAX_LEAVES_PER_YEAR);
                summary.availed_leaves = Some(MAX_LEAVES_PER_YEAR - leaves_avail);
            }
            Self::Contractor { agency, .. } => {
                summary.agency = Some(agency.to_string());
            }
            Self::Intern {
                college, branch, ..
            } => {
                summary.college = Some(college.to_string());
                summary.branch = Some(branch.to_string());
            }
            Self::Resigned { .. } => {}
        }
        summary
    }

    /// Ordered key/value pairs for the verbose detail view. The console
    /// owns the formatting; the record only supplies values.
    pub fn detail_fields(&self) -> Vec<(&'static str, String)> {
        let core = self.core();
        let mut fields = vec![
            ("Employee Name", core.name.clone()),
            ("Employee ID", core.id.clone()),
            (
                if matches!(self, Self::Resigned { .. }) {
                    "Last Known Type"
                } else {
                    "Employee Type"
                },
                self.employee_type().to_string(),
            ),
            ("Employee Status", core.status.to_string()),
            ("Gender", core.gender.to_string()),
            ("Date of Birth", core.dob.clone()),
            ("Date of Joining", core.doj.clone()),
        ];
        match self {
            Self::FullTime { leaves_avail, .. } => {
                fields.push(("Leaves Availed", (MAX_LEAVES_PER_YEAR - leaves_avail).to_string()));
                fields.push(("Leaves Left", leaves_avail.to_string()));
            }
            Self::Contractor { agency, dol, .. } => {
                fields.push(("Date of Leaving", dol.clone().unwrap_or_else(|| "-".into())));
                fields.push(("External Agency", agency.to_string()));
            }
            Self::Intern {
                college,
                branch,
                dol,
                ..
            } => {
                fields.push(("Date of Leaving", dol.clone().unwrap_or_else(|| "-".into())));
                fields.push(("College", college.to_string()));
                fields.push(("Branch", branch.to_string()));
            }
            Self::Resigned { dol, .. } => {
                fields.push(("Date of Leaving", dol.clone()));
            }
        }
        fields
    }
}
