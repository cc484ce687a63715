use crate::workflows::underwriting::domain::EmploymentStatus;
use crate::workflows::underwriting::evaluation::select_rate;

#[test]
fn top_band_prefers_salaried_applicants() {
    assert_eq!(select_rate(750, EmploymentStatus::Salaried), 9.0);
    assert_eq!(select_rate(820, EmploymentStatus::Salaried), 9.0);
    assert_eq!(select_rate(750, EmploymentStatus::SelfEmployed), 10.0);
    assert_eq!(select_rate(750, EmploymentStatus::Unemployed), 10.0);
}

#[test]
fn band_boundaries_are_inclusive() {
    assert_eq!(select_rate(749, EmploymentStatus::Salaried), 10.5);
    assert_eq!(select_rate(700, EmploymentStatus::Salaried), 10.5);
    assert_eq!(select_rate(700, EmploymentStatus::SelfEmployed), 11.5);
    assert_eq!(select_rate(699, EmploymentStatus::Salaried), 12.0);
    assert_eq!(select_rate(650, EmploymentStatus::SelfEmployed), 13.0);
    assert_eq!(select_rate(649, EmploymentStatus::Salaried), 14.0);
    assert_eq!(select_rate(600, EmploymentStatus::Salaried), 14.0);
    assert_eq!(select_rate(600, EmploymentStatus::Unemployed), 15.0);
}

#[test]
fn scores_below_every_band_fall_to_high_risk_rate() {
    assert_eq!(select_rate(599, EmploymentStatus::Salaried), 18.0);
    assert_eq!(select_rate(0, EmploymentStatus::SelfEmployed), 18.0);
    assert_eq!(select_rate(-250, EmploymentStatus::Salaried), 18.0);
}
