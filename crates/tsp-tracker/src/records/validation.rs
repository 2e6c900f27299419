use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use super::domain::QuarterlySubmission;
use crate::directory::FacilityId;
use crate::performance::{IndicatorCode, IndicatorReading, ReadingInput, ReadingSet};
use crate::program::{Mentor, MentorId, Pathway};

/// Accepted range for a stored indicator percentage.
pub const PERCENT_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Reasons a quarterly submission cannot be saved.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordViolation {
    #[error("facility {0} is not in the supported facility directory")]
    UnknownFacility(FacilityId),
    #[error("select a technical support pathway before saving")]
    MissingPathway,
    #[error("unknown indicator code '{0}'")]
    UnknownIndicator(String),
    #[error("indicator {0} was submitted more than once")]
    DuplicateIndicator(IndicatorCode),
    #[error("indicator {0} cannot carry both a value and a not-applicable flag")]
    ConflictingReading(IndicatorCode),
    #[error("indicator {indicator} value {value} is not a number")]
    NonFiniteValue { indicator: IndicatorCode, value: f64 },
    #[error("indicator {indicator} value {value} must be between 0 and 100")]
    PercentOutOfRange { indicator: IndicatorCode, value: f64 },
    #[error("mentor '{0}' is not on the mentor roster")]
    UnknownMentor(MentorId),
}

/// Convert form readings into a full reading set.
///
/// Every catalogue indicator is present in the result; codes the form left
/// out become [`IndicatorReading::Missing`]. Two keys naming the same
/// indicator are rejected.
pub fn validate_readings(
    inputs: &BTreeMap<String, ReadingInput>,
) -> Result<ReadingSet, RecordViolation> {
    let mut readings: ReadingSet = IndicatorCode::ordered()
        .into_iter()
        .map(|code| (code, IndicatorReading::Missing))
        .collect();
    let mut seen = BTreeSet::new();

    for (raw_code, input) in inputs {
        let indicator = IndicatorCode::parse(raw_code)
            .ok_or_else(|| RecordViolation::UnknownIndicator(raw_code.trim().to_string()))?;
        if !seen.insert(indicator) {
            return Err(RecordViolation::DuplicateIndicator(indicator));
        }
        let reading = IndicatorReading::try_from(*input)
            .map_err(|_| RecordViolation::ConflictingReading(indicator))?;

        if let IndicatorReading::Value(value) = reading {
            if !value.is_finite() {
                return Err(RecordViolation::NonFiniteValue { indicator, value });
            }
            if !PERCENT_RANGE.contains(&value) {
                return Err(RecordViolation::PercentOutOfRange { indicator, value });
            }
        }

        readings.insert(indicator, reading);
    }

    Ok(readings)
}

/// Every mentor credited on a record must be on the roster.
pub fn validate_mentors(mentors: &[MentorId], roster: &[Mentor]) -> Result<(), RecordViolation> {
    match mentors
        .iter()
        .find(|id| !roster.iter().any(|mentor| &mentor.id == *id))
    {
        Some(unknown) => Err(RecordViolation::UnknownMentor(unknown.clone())),
        None => Ok(()),
    }
}

pub(crate) fn require_pathway(
    submission: &QuarterlySubmission,
) -> Result<Pathway, RecordViolation> {
    submission.pathway.ok_or(RecordViolation::MissingPathway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::mentor_roster;

    fn inputs(entries: &[(&str, Option<f64>, bool)]) -> BTreeMap<String, ReadingInput> {
        entries
            .iter()
            .map(|(code, value, is_na)| {
                (
                    code.to_string(),
                    ReadingInput {
                        value: *value,
                        is_na: *is_na,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn fills_unreported_indicators_as_missing() {
        let readings =
            validate_readings(&inputs(&[("1.1", Some(92.0), false), ("3.1", None, true)]))
                .expect("valid readings");
        assert_eq!(readings.len(), 6);
        assert_eq!(
            readings[&IndicatorCode::TestingEnrollment],
            IndicatorReading::Value(92.0)
        );
        assert_eq!(
            readings[&IndicatorCode::AdvancedHivDisease],
            IndicatorReading::NotApplicable
        );
        assert_eq!(
            readings[&IndicatorCode::ViralLoadTesting],
            IndicatorReading::Missing
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            validate_readings(&inputs(&[("7.1", Some(50.0), false)])),
            Err(RecordViolation::UnknownIndicator("7.1".to_string()))
        );
    }

    #[test]
    fn rejects_value_with_na_flag() {
        assert_eq!(
            validate_readings(&inputs(&[("2.1", Some(50.0), true)])),
            Err(RecordViolation::ConflictingReading(IndicatorCode::ArtInitiation))
        );
    }

    #[test]
    fn rejects_out_of_range_and_non_finite_values() {
        assert!(matches!(
            validate_readings(&inputs(&[("4.1", Some(100.5), false)])),
            Err(RecordViolation::PercentOutOfRange {
                indicator: IndicatorCode::TreatmentContinuity,
                ..
            })
        ));
        assert!(matches!(
            validate_readings(&inputs(&[("4.1", Some(-1.0), false)])),
            Err(RecordViolation::PercentOutOfRange { .. })
        ));
        assert!(matches!(
            validate_readings(&inputs(&[("5.1", Some(f64::NAN), false)])),
            Err(RecordViolation::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn rejects_two_keys_for_one_indicator() {
        assert_eq!(
            validate_readings(&inputs(&[
                ("4.1", Some(10.0), false),
                (" 4.1", Some(99.0), false),
            ])),
            Err(RecordViolation::DuplicateIndicator(
                IndicatorCode::TreatmentContinuity
            ))
        );
    }

    #[test]
    fn mentors_must_be_on_the_roster() {
        let roster = mentor_roster();
        assert_eq!(
            validate_mentors(&[MentorId("rina".to_string())], &roster),
            Ok(())
        );
        assert_eq!(validate_mentors(&[], &roster), Ok(()));
        assert_eq!(
            validate_mentors(
                &[MentorId("dewi".to_string()), MentorId("agus".to_string())],
                &roster
            ),
            Err(RecordViolation::UnknownMentor(MentorId("agus".to_string())))
        );
    }

    #[test]
    fn boundary_percentages_are_accepted() {
        let readings = validate_readings(&inputs(&[
            ("1.1", Some(0.0), false),
            ("2.1", Some(100.0), false),
        ]))
        .expect("boundaries are valid");
        assert_eq!(
            readings[&IndicatorCode::ArtInitiation],
            IndicatorReading::Value(100.0)
        );
    }
}
