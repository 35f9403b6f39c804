use crate::types::snapshot::{ItemState, Issue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFacts {
    pub total: usize,
    pub open: usize,
    pub avg_comments: f64,
}

pub fn analyze_issues(issues: &[Issue]) -> IssueFacts {
    if issues.is_empty() {
        return IssueFacts::default();
    }

    IssueFacts {
        total: issues.len(),
        open: issues
            .iter()
            .filter(|issue| issue.state == ItemState::Open)
            .count(),
        avg_comments: issues.iter().map(|issue| issue.comments as f64).sum::<f64>()
            / issues.len() as f64,
    }
}
