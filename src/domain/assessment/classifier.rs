//! Risk classification from age, gender and trigger count.
//!
//! The thresholds live in a single ordered table, [`RISK_RULES`]. Rules are
//! tried top to bottom and the first one that applies decides the level;
//! when none applies the level is [`RiskLevel::None`].
//!
//! | # | condition                              | level      |
//! |---|----------------------------------------|------------|
//! | 1 | triggers ≤ 1                           | NONE       |
//! | 2 | age ≥ 30, triggers ≤ 5                 | BORDERLINE |
//! | 3 | age ≥ 30, triggers ≤ 7                 | INDANGER   |
//! | 4 | age ≥ 30                               | EARLYONSET |
//! | 5 | age < 30, male, triggers ≥ 5           | EARLYONSET |
//! | 6 | age < 30, male, triggers ≥ 3           | INDANGER   |
//! | 7 | age < 30, female, triggers ≥ 7         | EARLYONSET |
//! | 8 | age < 30, female, triggers ≥ 4         | INDANGER   |

use super::RiskLevel;
use crate::domain::patient::Gender;

/// Age from which the adult thresholds apply (inclusive).
pub const ADULT_AGE_THRESHOLD: u32 = 30;

/// Inputs to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactors {
    pub age: u32,
    pub gender: Gender,
    pub trigger_count: usize,
}

impl RiskFactors {
    fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE_THRESHOLD
    }

    fn is_young(&self, gender: Gender) -> bool {
        !self.is_adult() && self.gender == gender
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    /// Short description used in logs.
    pub name: &'static str,
    applies: fn(&RiskFactors) -> bool,
    pub level: RiskLevel,
}

impl RiskRule {
    pub fn applies(&self, factors: &RiskFactors) -> bool {
        (self.applies)(factors)
    }
}

/// Ordered decision table; first match wins.
pub static RISK_RULES: [RiskRule; 8] = [
    RiskRule {
        name: "at most one trigger",
        applies: at_most_one_trigger,
        level: RiskLevel::None,
    },
    RiskRule {
        name: "adult, at most 5 triggers",
        applies: adult_up_to_five,
        level: RiskLevel::Borderline,
    },
    RiskRule {
        name: "adult, at most 7 triggers",
        applies: adult_up_to_seven,
        level: RiskLevel::InDanger,
    },
    RiskRule {
        name: "adult, more than 7 triggers",
        applies: adult,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        name: "young male, 5 or more triggers",
        applies: young_male_five_or_more,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        name: "young male, 3 or more triggers",
        applies: young_male_three_or_more,
        level: RiskLevel::InDanger,
    },
    RiskRule {
        name: "young female, 7 or more triggers",
        applies: young_female_seven_or_more,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        name: "young female, 4 or more triggers",
        applies: young_female_four_or_more,
        level: RiskLevel::InDanger,
    },
];

fn at_most_one_trigger(f: &RiskFactors) -> bool {
    f.trigger_count <= 1
}

fn adult_up_to_five(f: &RiskFactors) -> bool {
    f.is_adult() && f.trigger_count <= 5
}

fn adult_up_to_seven(f: &RiskFactors) -> bool {
    f.is_adult() && f.trigger_count <= 7
}

fn adult(f: &RiskFactors) -> bool {
    f.is_adult()
}

fn young_male_five_or_more(f: &RiskFactors) -> bool {
    f.is_young(Gender::Male) && f.trigger_count >= 5
}

fn young_male_three_or_more(f: &RiskFactors) -> bool {
    f.is_young(Gender::Male) && f.trigger_count >= 3
}

fn young_female_seven_or_more(f: &RiskFactors) -> bool {
    f.is_young(Gender::Female) && f.trigger_count >= 7
}

fn young_female_four_or_more(f: &RiskFactors) -> bool {
    f.is_young(Gender::Female) && f.trigger_count >= 4
}

/// Returns the first rule of [`RISK_RULES`] that applies, if any.
pub fn matching_rule(factors: &RiskFactors) -> Option<&'static RiskRule> {
    RISK_RULES.iter().find(|rule| rule.applies(factors))
}

/// Outcome of a classification, with the rule that decided it.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub level: RiskLevel,
    /// `None` when no rule applied and the level fell back to NONE.
    pub rule: Option<&'static RiskRule>,
}

/// Runs [`RISK_RULES`] over `factors`. Total: always yields a level.
pub fn classify_factors(factors: &RiskFactors) -> Classification {
    let rule = matching_rule(factors);
    Classification {
        level: rule.map(|r| r.level).unwrap_or_default(),
        rule,
    }
}

/// Classifies a patient. Total: always returns a level.
pub fn classify(age: u32, gender: Gender, trigger_count: usize) -> RiskLevel {
    classify_factors(&RiskFactors {
        age,
        gender,
        trigger_count,
    })
    .level
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    #[test]
    fn zero_or_one_trigger_is_none_for_everyone() {
        for gender in GENDERS {
            for age in [0, 18, 29, 30, 45, 90] {
                assert_eq!(classify(age, gender, 0), RiskLevel::None);
                assert_eq!(classify(age, gender, 1), RiskLevel::None);
            }
        }
    }

    #[test]
    fn adult_thresholds_ignore_gender() {
        for gender in GENDERS {
            for age in [30, 45, 80] {
                assert_eq!(classify(age, gender, 2), RiskLevel::Borderline);
                assert_eq!(classify(age, gender, 5), RiskLevel::Borderline);
                assert_eq!(classify(age, gender, 6), RiskLevel::InDanger);
                assert_eq!(classify(age, gender, 7), RiskLevel::InDanger);
                assert_eq!(classify(age, gender, 8), RiskLevel::EarlyOnset);
                assert_eq!(classify(age, gender, 12), RiskLevel::EarlyOnset);
            }
        }
    }

    #[test]
    fn age_thirty_uses_adult_rules() {
        assert_eq!(classify(30, Gender::Male, 2), RiskLevel::Borderline);
        assert_eq!(classify(29, Gender::Male, 2), RiskLevel::None);
    }

    #[test]
    fn young_male_thresholds() {
        assert_eq!(classify(20, Gender::Male, 2), RiskLevel::None);
        assert_eq!(classify(20, Gender::Male, 3), RiskLevel::InDanger);
        assert_eq!(classify(20, Gender::Male, 4), RiskLevel::InDanger);
        assert_eq!(classify(20, Gender::Male, 5), RiskLevel::EarlyOnset);
        assert_eq!(classify(20, Gender::Male, 9), RiskLevel::EarlyOnset);
    }

    #[test]
    fn young_female_thresholds() {
        assert_eq!(classify(20, Gender::Female, 3), RiskLevel::None);
        assert_eq!(classify(20, Gender::Female, 4), RiskLevel::InDanger);
        assert_eq!(classify(20, Gender::Female, 6), RiskLevel::InDanger);
        assert_eq!(classify(20, Gender::Female, 7), RiskLevel::EarlyOnset);
    }

    #[test]
    fn young_other_gender_is_none() {
        for count in 0..=12 {
            assert_eq!(classify(25, Gender::Other, count), RiskLevel::None);
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        let factors = RiskFactors {
            age: 45,
            gender: Gender::Male,
            trigger_count: 4,
        };
        // rules 2, 3 and 4 all apply; the table order picks rule 2
        assert_eq!(matching_rule(&factors).unwrap().level, RiskLevel::Borderline);
        assert_eq!(matching_rule(&factors).unwrap().name, "adult, at most 5 triggers");
    }

    #[test]
    fn no_rule_for_young_male_with_two_triggers() {
        let factors = RiskFactors {
            age: 20,
            gender: Gender::Male,
            trigger_count: 2,
        };
        assert!(matching_rule(&factors).is_none());
    }

    #[test]
    fn unmatched_factors_classify_as_none_without_rule() {
        let factors = RiskFactors {
            age: 22,
            gender: Gender::Female,
            trigger_count: 3,
        };
        let classification = classify_factors(&factors);
        assert_eq!(classification.level, RiskLevel::None);
        assert!(classification.rule.is_none());
    }

    #[test]
    fn classification_reports_deciding_rule() {
        let factors = RiskFactors {
            age: 20,
            gender: Gender::Male,
            trigger_count: 5,
        };
        let classification = classify_factors(&factors);
        assert_eq!(classification.level, RiskLevel::EarlyOnset);
        assert_eq!(
            classification.rule.map(|r| r.name),
            Some("young male, 5 or more triggers")
        );
    }

    proptest! {
        #[test]
        fn adults_never_fall_back_to_default(age in 30u32..120, count in 2usize..40) {
            let factors = RiskFactors { age, gender: Gender::Other, trigger_count: count };
            prop_assert!(matching_rule(&factors).is_some());
        }

        #[test]
        fn more_triggers_never_lowers_risk(age in 0u32..120, count in 0usize..40, g in 0usize..3) {
            let gender = GENDERS[g];
            prop_assert!(classify(age, gender, count) <= classify(age, gender, count + 1));
        }
    }
}
