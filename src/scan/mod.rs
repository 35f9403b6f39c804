pub mod commits;
pub mod issues;
pub mod pulls;
pub mod readme;
pub mod structure;
pub mod tests_ci;

use crate::types::config::AnalyzerRules;
use crate::types::snapshot::{ExternalQuality, RepositoryAttributes, RepositorySnapshot};
use commits::CommitFacts;
use issues::IssueFacts;
use pulls::PullRequestFacts;
use readme::ReadmeFacts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use structure::StructureFacts;
use tests_ci::TestCiFacts;
use tracing::debug;

/// Everything the scorers need, derived once per snapshot.
///
/// Built only by [`discover`]; scorers borrow it immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facts {
    pub attributes: RepositoryAttributes,
    pub languages: BTreeMap<String, u64>,
    pub structure: StructureFacts,
    pub commits: CommitFacts,
    pub pull_requests: PullRequestFacts,
    pub issues: IssueFacts,
    pub readme: ReadmeFacts,
    pub tests_ci: TestCiFacts,
    pub external: ExternalQuality,
}

impl Facts {
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.languages
            .keys()
            .any(|language| language.eq_ignore_ascii_case(name))
    }

    /// A license file in the listing or the host's license flag.
    pub fn has_license(&self) -> bool {
        self.structure.has_license || self.attributes.has_license
    }
}

/// Runs every analyzer over the snapshot. The analyzers share no state.
pub fn discover(snapshot: &RepositorySnapshot, rules: &AnalyzerRules) -> Facts {
    let structure = structure::analyze_structure(&snapshot.entries, &rules.structure);
    debug!(
        total_files = structure.total_files,
        directories = structure.directories.len(),
        organization = structure.organization_score,
        "structure analyzed"
    );

    let commits = commits::analyze_commits(&snapshot.commits, &rules.commit_messages);
    debug!(
        total = commits.total,
        authors = commits.distinct_authors,
        frequency = commits.frequency_per_day,
        "commits analyzed"
    );

    let pull_requests = pulls::analyze_pull_requests(&snapshot.pull_requests);
    debug!(
        total = pull_requests.total,
        merged = pull_requests.merged,
        "pull requests analyzed"
    );

    let issues = issues::analyze_issues(&snapshot.issues);

    let readme = readme::analyze_readme(&snapshot.readme, &rules.readme);
    debug!(
        exists = readme.exists,
        score = readme.score,
        quality = readme.quality,
        "readme analyzed"
    );

    let tests_ci = tests_ci::analyze_tests_ci(
        &snapshot.entries,
        snapshot.workflow_count,
        &rules.test_detection,
    );
    debug!(
        test_files = tests_ci.test_file_count,
        has_ci = tests_ci.has_ci,
        "tests and ci analyzed"
    );

    Facts {
        attributes: snapshot.attributes.clone(),
        languages: snapshot.languages.clone(),
        structure,
        commits,
        pull_requests,
        issues,
        readme,
        tests_ci,
        external: snapshot.quality.clone(),
    }
}
