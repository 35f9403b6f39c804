use crate::scan::Facts;
use crate::types::config::TestingRules;
use crate::types::scoring::{clamp_score, Score};

pub fn testing_score(facts: &Facts, rules: &TestingRules) -> Score {
    let tests = &facts.tests_ci;
    let mut score = 0.0;
    if tests.has_tests {
        score += rules.has_tests_bonus;
    }
    if tests.has_test_config {
        score += rules.test_config_bonus;
    }
    if tests.has_coverage_config {
        score += rules.coverage_config_bonus;
    }
    if tests.test_file_count > rules.many_test_files_above {
        score += rules.many_test_files_bonus;
    }
    clamp_score(score)
}
