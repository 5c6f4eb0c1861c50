//! Employee ID generation.
//!
//! Format: 3-letter company prefix + 4-digit zero-padded counter +
//! one-letter type suffix, e.g. "XYZ0042C". Deterministic given its
//! inputs; uniqueness comes from the manager's monotonic counter.

use crate::employee::EmployeeType;

pub const ID_PREFIX: &str = "XYZ";

pub fn employee_id(employee_type: EmployeeType, counter: u32) -> String {
    format!("{ID_PREFIX}{counter:04}{}", employee_type.id_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_counter_and_suffix() {
        assert_eq!(employee_id(EmployeeType::FullTime, 1), "XYZ0001F");
        assert_eq!(employee_id(EmployeeType::Contractor, 42), "XYZ0042C");
        assert_eq!(employee_id(EmployeeType::Intern, 9999), "XYZ9999I");
    }

    #[test]
    fn counter_wider_than_four_digits_is_not_truncated() {
        assert_eq!(employee_id(EmployeeType::Intern, 12345), "XYZ12345I");
    }
}
