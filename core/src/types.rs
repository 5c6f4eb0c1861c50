//! Shared primitive types used across the whole crate.

/// A formatted employee identifier, e.g. "XYZ0001F".
pub type EmployeeId = String;

/// A calendar date as a fixed-width DD-MM-YYYY string.
pub type DateString = String;
