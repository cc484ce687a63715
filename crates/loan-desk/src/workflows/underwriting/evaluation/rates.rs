use super::super::domain::EmploymentStatus;

struct RateBand {
    min_score: i64,
    salaried: f64,
    other: f64,
}

/// Annual rate card, highest credit band first. The first matching band wins.
const RATE_BANDS: [RateBand; 4] = [
    RateBand {
        min_score: 750,
        salaried: 9.0,
        other: 10.0,
    },
    RateBand {
        min_score: 700,
        salaried: 10.5,
        other: 11.5,
    },
    RateBand {
        min_score: 650,
        salaried: 12.0,
        other: 13.0,
    },
    RateBand {
        min_score: 600,
        salaried: 14.0,
        other: 15.0,
    },
];

/// Annual rate quoted to applicants below every scored band.
const HIGH_RISK_RATE: f64 = 18.0;

/// Select the annual percentage rate for a credit score and employment
/// status.
///
/// Any integer score is accepted; scores below the lowest band (including
/// negative values) fall through to the high-risk rate. No side effects.
pub fn select_rate(credit_score: i64, employment_status: EmploymentStatus) -> f64 {
    for band in &RATE_BANDS {
        if credit_score >= band.min_score {
            return if employment_status.is_salaried() {
                band.salaried
            } else {
                band.other
            };
        }
    }
    HIGH_RISK_RATE
}
