use crate::types::config::StructureRules;
use crate::types::snapshot::RepositoryEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const NO_EXTENSION: &str = "none";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureFacts {
    pub total_files: usize,
    /// Lowercased extension to file count.
    pub file_types: BTreeMap<String, usize>,
    pub directories: Vec<String>,
    pub depth: usize,
    pub organization_score: u32,
    pub has_license: bool,
    pub has_contributing: bool,
}

pub fn analyze_structure(entries: &[RepositoryEntry], rules: &StructureRules) -> StructureFacts {
    let mut file_types = BTreeMap::<String, usize>::new();
    let mut directories = Vec::new();
    let mut total_files = 0;

    for entry in entries {
        if entry.is_dir() {
            directories.push(entry.path.clone());
        } else if entry.is_file() {
            total_files += 1;
            *file_types.entry(extension_of(&entry.name)).or_default() += 1;
        }
    }

    let depth = directories
        .iter()
        .map(|dir| dir.split('/').filter(|segment| !segment.is_empty()).count())
        .max()
        .unwrap_or(0);
    let organization_score = organization_score(&directories, &file_types, total_files, rules);

    StructureFacts {
        total_files,
        file_types,
        directories,
        depth,
        organization_score,
        has_license: any_name_contains(entries, &rules.license_markers),
        has_contributing: any_name_contains(entries, &rules.contributing_markers),
    }
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

fn organization_score(
    directories: &[String],
    file_types: &BTreeMap<String, usize>,
    total_files: usize,
    rules: &StructureRules,
) -> u32 {
    let mut score: i64 = 0;

    for standard in &rules.standard_directories {
        if directories
            .iter()
            .any(|dir| dir == standard || dir.contains(standard.as_str()))
        {
            score += rules.directory_bonus;
        }
    }

    if rules
        .organized_extensions
        .iter()
        .any(|ext| file_types.contains_key(ext))
    {
        score += rules.organized_bonus;
    }

    if total_files > rules.crowded_file_limit {
        score -= rules.crowded_penalty;
    }

    score.clamp(0, 100) as u32
}

fn any_name_contains(entries: &[RepositoryEntry], markers: &[String]) -> bool {
    entries.iter().any(|entry| {
        let name = entry.name.to_lowercase();
        markers.iter().any(|marker| name.contains(marker.as_str()))
    })
}
