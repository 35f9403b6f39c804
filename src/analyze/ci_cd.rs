use crate::scan::Facts;
use crate::types::config::CiCdRules;
use crate::types::scoring::{clamp_score, Score};

/// Score carried over from CI detection, before the workflow bonus.
pub fn ci_base_score(facts: &Facts, rules: &CiCdRules) -> Score {
    let ci = &facts.tests_ci;
    let mut score = 0.0;
    if ci.has_ci {
        score += rules.has_ci_base;
    }
    if ci.ci_config_file_count > 0 {
        score += rules.config_file_bonus;
    }
    if ci.ci_config_file_count > 1 {
        score += rules.multiple_config_files_bonus;
    }
    clamp_score(score)
}

pub fn ci_cd_score(facts: &Facts, rules: &CiCdRules) -> Score {
    let mut score = ci_base_score(facts, rules);
    if facts.tests_ci.workflow_count > 1 {
        score += rules.multiple_workflows_bonus;
    }
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ci_scores_zero() {
        assert_eq!(ci_cd_score(&Facts::default(), &CiCdRules::default()), 0.0);
    }

    #[test]
    fn single_workflow_without_config_files() {
        let mut facts = Facts::default();
        facts.tests_ci.has_ci = true;
        facts.tests_ci.workflow_count = 1;
        assert_eq!(ci_cd_score(&facts, &CiCdRules::default()), 50.0);
    }

    #[test]
    fn workflows_and_config_files_clamp() {
        let mut facts = Facts::default();
        facts.tests_ci.has_ci = true;
        facts.tests_ci.workflow_count = 3;
        facts.tests_ci.ci_config_file_count = 1;
        assert_eq!(ci_base_score(&facts, &CiCdRules::default()), 80.0);
        assert_eq!(ci_cd_score(&facts, &CiCdRules::default()), 100.0);
    }
}
