use crate::types::config::TestDetectionRules;
use crate::types::snapshot::RepositoryEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCiFacts {
    pub has_tests: bool,
    pub test_file_count: usize,
    pub test_dir_count: usize,
    pub has_test_config: bool,
    pub has_coverage_config: bool,
    pub has_ci: bool,
    pub workflow_count: u32,
    pub ci_config_file_count: usize,
}

pub fn analyze_tests_ci(
    entries: &[RepositoryEntry],
    workflow_count: u32,
    rules: &TestDetectionRules,
) -> TestCiFacts {
    let mut test_file_count = 0;
    let mut test_dir_count = 0;
    let mut has_test_config = false;
    let mut has_coverage_config = false;
    let mut ci_config_file_count = 0;

    for entry in entries {
        let name = entry.name.to_lowercase();

        if contains_any(&name, &rules.test_markers) {
            if entry.is_dir() {
                test_dir_count += 1;
            } else {
                test_file_count += 1;
            }
        }
        has_test_config |= contains_any(&name, &rules.runner_keywords);
        has_coverage_config |= contains_any(&name, &rules.coverage_keywords);
        ci_config_file_count += ci_matches(entry, &name, rules);
    }

    TestCiFacts {
        has_tests: test_file_count > 0,
        test_file_count,
        test_dir_count,
        has_test_config,
        has_coverage_config,
        has_ci: workflow_count > 0 || ci_config_file_count > 0,
        workflow_count,
        ci_config_file_count,
    }
}

/// Each CI pattern an entry matches counts once.
fn ci_matches(entry: &RepositoryEntry, name: &str, rules: &TestDetectionRules) -> usize {
    let path = entry.path.to_lowercase();
    let workflow_dir = rules.ci_workflow_dir.to_lowercase();
    let in_workflow_dir = (!workflow_dir.is_empty() && path.contains(workflow_dir.as_str()))
        || (name.contains("github") && name.contains("workflow"));

    usize::from(in_workflow_dir)
        + rules
            .ci_name_patterns
            .iter()
            .filter(|pattern| name.contains(pattern.to_lowercase().as_str()))
            .count()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| haystack.contains(needle.to_lowercase().as_str()))
}
