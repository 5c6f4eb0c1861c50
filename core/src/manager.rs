//! The employee manager — owner of the two record collections and the
//! only code allowed to mutate them.
//!
//! RULES:
//!   - A record lives in exactly one deque at a time: `active` holds
//!     Active and Inactive employees, `resigned` holds the archive.
//!   - {Active, Inactive} --resign--> Resigned is terminal.
//!   - Type conversion (Intern/Contractor -> FullTime) replaces the
//!     record at its slot; it never mutates across variant shapes.
//!   - Every lookup happens before every mutation, so the container's
//!     contract errors cannot fire from manager logic.
//!   - All randomness flows through the manager's own DeskRng.

use crate::{
    dates,
    deque::IndexedDeque,
    employee::{
        Agency, Branch, College, EmployeeRecord, EmployeeSummary, EmployeeType, Gender, Status,
        DEFAULT_LEAVES, MAX_LEAVES_PER_YEAR,
    },
    error::{CoreError, CoreResult},
    factory::{EmployeeFactory, NewEmployeeArgs},
    ids,
    name_generator::NameGenerator,
    rng::DeskRng,
};

/// Upper bound for one bulk-add request.
pub const MAX_BULK_ADD: i64 = 10_000;

/// Weighted status draw for randomly generated employees, out of 10:
/// 7 Active, 2 Inactive, 1 Resigned.
const ACTIVE_WEIGHT: u64 = 7;
const INACTIVE_WEIGHT: u64 = 2;
const TOTAL_WEIGHT: u64 = 10;

/// Where a new employee's fields come from.
pub enum NewEmployeeSource {
    /// Synthesize every field from the manager's RNG.
    Random,
    /// Validated console input; status is always Active.
    Manual(ManualEmployeeInput),
}

/// Fields collected from the console for a manual add. The console
/// re-prompts on validation errors, so the user-visible flow always
/// succeeds eventually.
#[derive(Debug, Clone)]
pub struct ManualEmployeeInput {
    pub gender: Gender,
    pub name: String,
    pub dob: String,
    pub doj: String,
}

/// What `add_employee` created, for the console confirmation line.
#[derive(Debug, Clone)]
pub struct AddReceipt {
    pub id: String,
    pub name: String,
    pub employee_type: EmployeeType,
    pub status: Status,
}

pub struct EmployeeManager {
    active: IndexedDeque<EmployeeRecord>,
    resigned: IndexedDeque<EmployeeRecord>,
    counter: u32,
    rng: DeskRng,
}

impl EmployeeManager {
    pub fn new(rng: DeskRng) -> Self {
        Self {
            active: IndexedDeque::new(),
            resigned: IndexedDeque::new(),
            counter: 0,
            rng,
        }
    }

    /// Build a manager with a fixed seed. Tests use this for
    /// reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(DeskRng::from_seed(seed))
    }

    /// Draw a random employee type (the console's random-add path and
    /// bulk creation both use it).
    pub fn random_employee_type(&mut self) -> EmployeeType {
        *self.rng.pick(&EmployeeType::ALL)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn resigned_count(&self) -> usize {
        self.resigned.len()
    }

    pub fn total_count(&self) -> usize {
        self.active.len() + self.resigned.len()
    }

    // ── Creation ───────────────────────────────────────────────

    /// Add one employee of the given type. Random sources draw every
    /// field (including a weighted status); manual sources are
    /// validated and always enter as Active.
    pub fn add_employee(
        &mut self,
        employee_type: EmployeeType,
        source: NewEmployeeSource,
    ) -> CoreResult<AddReceipt> {
        let (gender, name, dob, doj, status, leaves) = match source {
            NewEmployeeSource::Random => {
                let gender = if self.rng.below(2) == 0 {
                    Gender::Male
                } else {
                    Gender::Female
                };
                let name = NameGenerator::random_name(&mut self.rng, gender).to_string();
                let dob = dates::random_dob(&mut self.rng);
                let doj = dates::random_doj_from_dob(&mut self.rng, &dob)?;
                let status = self.random_status();
                let leaves = self.rng.range_inclusive(0, MAX_LEAVES_PER_YEAR);
                (gender, name, dob, doj, status, leaves)
            }
            NewEmployeeSource::Manual(input) => {
                Self::validate_manual(&input)?;
                (
                    input.gender,
                    input.name.trim().to_string(),
                    input.dob,
                    input.doj,
                    Status::Active,
                    DEFAULT_LEAVES,
                )
            }
        };

        self.counter += 1;
        let id = ids::employee_id(employee_type, self.counter);
        let dol = if status == Status::Resigned {
            Some(dates::date_of_leaving(&mut self.rng, employee_type, &doj)?)
        } else {
            None
        };

        let args = NewEmployeeArgs {
            name: name.clone(),
            id: id.clone(),
            gender,
            dob,
            doj,
            dol,
            employee_type,
            status,
            leaves,
            agency: *self.rng.pick(&Agency::ALL),
            college: *self.rng.pick(&College::ALL),
            branch: *self.rng.pick(&Branch::ALL),
        };
        let record = EmployeeFactory::build(args);

        if status == Status::Resigned {
            self.resigned.push_back(record);
        } else {
            self.active.push_back(record);
        }
        log::info!("added {employee_type} {name} ({id}) status={status}");

        Ok(AddReceipt {
            id,
            name,
            employee_type,
            status,
        })
    }

    /// Create `n` fully random employees. Rejects n <= 0 and
    /// n > MAX_BULK_ADD with no effect.
    pub fn add_multiple_random(&mut self, n: i64) -> CoreResult<usize> {
        if n <= 0 || n > MAX_BULK_ADD {
            return Err(CoreError::InvalidCount {
                given: n,
                max: MAX_BULK_ADD,
            });
        }
        for _ in 0..n {
            let employee_type = self.random_employee_type();
            self.add_employee(employee_type, NewEmployeeSource::Random)?;
        }
        log::info!("bulk-added {n} random employees");
        Ok(n as usize)
    }

    // ── Lifecycle transitions ──────────────────────────────────

    /// Move an employee with matching id AND type into the resigned
    /// archive. A fresh Resigned record (with a freshly computed date
    /// of leaving) is inserted before the original is removed, so a
    /// failure can never leave the id in neither deque.
    pub fn resign(&mut self, id: &str, employee_type: EmployeeType) -> CoreResult<String> {
        let index = self
            .active
            .iter()
            .position(|r| r.id() == id && r.employee_type() == employee_type)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        let (name, args) = {
            let record = self.active.get(index)?;
            let core = record.core();
            let dol = dates::date_of_leaving(&mut self.rng, employee_type, &core.doj)?;
            (
                core.name.clone(),
                NewEmployeeArgs {
                    name: core.name.clone(),
                    id: core.id.clone(),
                    gender: core.gender,
                    dob: core.dob.clone(),
                    doj: core.doj.clone(),
                    dol: Some(dol),
                    employee_type,
                    status: Status::Resigned,
                    leaves: DEFAULT_LEAVES,
                    agency: Agency::default(),
                    college: College::default(),
                    branch: Branch::default(),
                },
            )
        };

        self.resigned.push_back(EmployeeFactory::build(args));
        self.active.remove_at(index)?;
        log::info!("resigned {employee_type} {name} ({id})");
        Ok(name)
    }

    /// Convert an intern to full-time, in place.
    pub fn convert_intern_to_full_time(&mut self, id: &str) -> CoreResult<String> {
        self.convert_to_full_time(id, EmployeeType::Intern)
    }

    /// Convert a contractor to full-time, in place.
    pub fn convert_contractor_to_full_time(&mut self, id: &str) -> CoreResult<String> {
        self.convert_to_full_time(id, EmployeeType::Contractor)
    }

    /// Replace the record at its slot with a fresh full-time record
    /// carrying forward name/id/gender/dob; joining date restarts at
    /// today and a new date of leaving is computed.
    fn convert_to_full_time(&mut self, id: &str, required: EmployeeType) -> CoreResult<String> {
        let index = self
            .active
            .iter()
            .position(|r| {
                r.id() == id && r.employee_type() == required && r.status() != Status::Resigned
            })
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        let args = {
            let record = self.active.get(index)?;
            let core = record.core();
            let doj = dates::current_date();
            let dol = dates::date_of_leaving(&mut self.rng, EmployeeType::FullTime, &doj)?;
            NewEmployeeArgs {
                name: core.name.clone(),
                id: core.id.clone(),
                gender: core.gender,
                dob: core.dob.clone(),
                doj,
                dol: Some(dol),
                employee_type: EmployeeType::FullTime,
                status: core.status,
                leaves: self.rng.range_inclusive(0, MAX_LEAVES_PER_YEAR),
                agency: Agency::default(),
                college: College::default(),
                branch: Branch::default(),
            }
        };

        let name = args.name.clone();
        *self.active.get_mut(index)? = EmployeeFactory::build(args);
        log::info!("converted {required} {name} ({id}) to full-time");
        Ok(name)
    }

    // ── Bulk mutation ──────────────────────────────────────────

    /// Add `n` leaves to every full-time employee (each balance clamps
    /// itself). Returns how many records were updated; the console
    /// reports 0 as "no full-time employees".
    pub fn add_leaves_to_all_full_time(&mut self, n: i32) -> CoreResult<usize> {
        if n <= 0 {
            return Err(CoreError::InvalidCount {
                given: n as i64,
                max: MAX_LEAVES_PER_YEAR as i64,
            });
        }
        let mut updated = 0;
        for index in 0..self.active.len() {
            let record = self.active.get_mut(index)?;
            if record.employee_type() == EmployeeType::FullTime {
                record.add_leaves(n);
                updated += 1;
            }
        }
        log::info!("added {n} leaves to {updated} full-time employee(s)");
        Ok(updated)
    }

    // ── Search ─────────────────────────────────────────────────

    /// All records with this id, active collection first. Ids are
    /// unique so this yields at most one record.
    pub fn search_by_id(&self, id: &str) -> Vec<&EmployeeRecord> {
        self.active
            .iter()
            .chain(self.resigned.iter())
            .filter(|r| r.id() == id)
            .collect()
    }

    /// All records with this exact name (case-sensitive); names are
    /// not unique, so several matches are possible.
    pub fn search_by_name(&self, name: &str) -> Vec<&EmployeeRecord> {
        self.active
            .iter()
            .chain(self.resigned.iter())
            .filter(|r| r.name() == name)
            .collect()
    }

    // ── Summaries ──────────────────────────────────────────────

    pub fn summary_all(&self) -> Vec<EmployeeSummary> {
        self.collect_summaries(|_| true, true, true)
    }

    pub fn summary_by_type(&self, employee_type: EmployeeType) -> Vec<EmployeeSummary> {
        self.collect_summaries(|r| r.employee_type() == employee_type, true, true)
    }

    /// Status filter can restrict the scan to the single relevant deque.
    pub fn summary_by_status(&self, status: Status) -> Vec<EmployeeSummary> {
        let resigned = status == Status::Resigned;
        self.collect_summaries(|r| r.status() == status, !resigned, resigned)
    }

    pub fn summary_by_gender(&self, gender: Gender) -> Vec<EmployeeSummary> {
        self.collect_summaries(|r| r.gender() == gender, true, true)
    }

    fn collect_summaries<F>(&self, keep: F, scan_active: bool, scan_resigned: bool) -> Vec<EmployeeSummary>
    where
        F: Fn(&EmployeeRecord) -> bool,
    {
        let mut rows = Vec::new();
        if scan_active {
            rows.extend(self.active.iter().filter(|r| keep(r)).map(|r| r.to_summary()));
        }
        if scan_resigned {
            rows.extend(self.resigned.iter().filter(|r| keep(r)).map(|r| r.to_summary()));
        }
        rows
    }

    // ── Internals ──────────────────────────────────────────────

    fn random_status(&mut self) -> Status {
        let roll = self.rng.below(TOTAL_WEIGHT);
        if roll < ACTIVE_WEIGHT {
            Status::Active
        } else if roll < ACTIVE_WEIGHT + INACTIVE_WEIGHT {
            Status::Inactive
        } else {
            Status::Resigned
        }
    }

    fn validate_manual(input: &ManualEmployeeInput) -> CoreResult<()> {
        if input.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if !dates::is_valid_date(&input.dob) {
            return Err(CoreError::InvalidDate(input.dob.clone()));
        }
        if !dates::is_valid_date(&input.doj) {
            return Err(CoreError::InvalidDate(input.doj.clone()));
        }
        if !dates::is_at_least_years_apart(&input.dob, &input.doj, dates::MIN_WORKING_AGE_YEARS)? {
            return Err(CoreError::UnderMinimumAge {
                years: dates::MIN_WORKING_AGE_YEARS,
            });
        }
        Ok(())
    }
}
