//! Eligibility screening and EMI estimation for retail loan applications.
//!
//! The decision core lives in [`workflows::underwriting::evaluation`]: a pure
//! engine that maps a sanitized applicant record onto an approve/decline
//! decision with itemized policy breaches, the quoted annual rate, and the
//! amortized monthly installment. The surrounding modules supply the intake
//! validation, report rendering, and application-lifecycle plumbing used by
//! the service binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
