use crate::error::EngineError;
use crate::types::scoring::Dimension;
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;

/// Every weight, threshold, bonus and keyword list the engine uses.
///
/// `Default` is the canonical version 1 rule set; TOML files only need to
/// name the values they override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: u32,
    pub weights: DimensionWeights,
    pub analyzers: AnalyzerRules,
    pub code_quality: CodeQualityRules,
    pub documentation: DocumentationRules,
    pub testing: TestingRules,
    pub ci_cd: CiCdRules,
    pub maintainability: MaintainabilityRules,
    pub collaboration: CollaborationRules,
    pub performance: PerformanceRules,
    pub security: SecurityRules,
    pub badges: BadgeRules,
    pub insights: InsightRules,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            weights: DimensionWeights::default(),
            analyzers: AnalyzerRules::default(),
            code_quality: CodeQualityRules::default(),
            documentation: DocumentationRules::default(),
            testing: TestingRules::default(),
            ci_cd: CiCdRules::default(),
            maintainability: MaintainabilityRules::default(),
            collaboration: CollaborationRules::default(),
            performance: PerformanceRules::default(),
            security: SecurityRules::default(),
            badges: BadgeRules::default(),
            insights: InsightRules::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DimensionWeights {
    pub code_quality: f64,
    pub documentation: f64,
    pub testing: f64,
    pub ci_cd: f64,
    pub maintainability: f64,
    pub collaboration: f64,
    pub performance: f64,
    pub security: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            code_quality: 0.25,
            documentation: 0.15,
            testing: 0.15,
            ci_cd: 0.10,
            maintainability: 0.15,
            collaboration: 0.10,
            performance: 0.05,
            security: 0.05,
        }
    }
}

impl DimensionWeights {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::CodeQuality => self.code_quality,
            Dimension::Documentation => self.documentation,
            Dimension::Testing => self.testing,
            Dimension::CiCd => self.ci_cd,
            Dimension::Maintainability => self.maintainability,
            Dimension::Collaboration => self.collaboration,
            Dimension::Performance => self.performance,
            Dimension::Security => self.security,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|dimension| self.get(*dimension)).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerRules {
    pub structure: StructureRules,
    pub commit_messages: CommitMessageRules,
    pub readme: ReadmeRules,
    pub test_detection: TestDetectionRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureRules {
    pub standard_directories: Vec<String>,
    pub directory_bonus: i64,
    pub organized_extensions: Vec<String>,
    pub organized_bonus: i64,
    pub crowded_file_limit: usize,
    pub crowded_penalty: i64,
    pub license_markers: Vec<String>,
    pub contributing_markers: Vec<String>,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self {
            standard_directories: strings(&["src", "lib", "test", "tests", "docs", "public", "app"]),
            directory_bonus: 10,
            organized_extensions: strings(&["js", "ts", "py", "java", "rb", "go", "rs"]),
            organized_bonus: 30,
            crowded_file_limit: 20,
            crowded_penalty: 20,
            license_markers: strings(&["license", "licence"]),
            contributing_markers: strings(&["contributing", "contribute"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMessageRules {
    pub short_length: usize,
    pub short_bonus: u32,
    pub long_length: usize,
    pub long_bonus: u32,
    pub reference_bonus: u32,
    pub conventional_bonus: u32,
    pub conventional_types: Vec<String>,
}

impl Default for CommitMessageRules {
    fn default() -> Self {
        Self {
            short_length: 10,
            short_bonus: 20,
            long_length: 30,
            long_bonus: 20,
            reference_bonus: 20,
            conventional_bonus: 40,
            conventional_types: strings(&[
                "feat", "fix", "docs", "style", "refactor", "test", "chore",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeRules {
    pub description_min_chars: usize,
    pub section_points: u32,
    pub heading_min: usize,
    pub code_block_min: usize,
    pub link_min: usize,
    pub word_target: usize,
    pub word_extended: usize,
    pub quality_step: u32,
    /// `has_links` is set above this many links.
    pub links_flag_above: usize,
}

impl Default for ReadmeRules {
    fn default() -> Self {
        Self {
            description_min_chars: 100,
            section_points: 10,
            heading_min: 3,
            code_block_min: 1,
            link_min: 3,
            word_target: 300,
            word_extended: 500,
            quality_step: 20,
            links_flag_above: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestDetectionRules {
    pub test_markers: Vec<String>,
    pub runner_keywords: Vec<String>,
    pub coverage_keywords: Vec<String>,
    pub ci_workflow_dir: String,
    pub ci_name_patterns: Vec<String>,
}

impl Default for TestDetectionRules {
    fn default() -> Self {
        Self {
            test_markers: strings(&["test", "spec"]),
            runner_keywords: strings(&["jest", "mocha", "pytest"]),
            coverage_keywords: strings(&["coverage", ".nycrc", "codecov"]),
            ci_workflow_dir: ".github/workflows".to_string(),
            ci_name_patterns: strings(&[
                "dockerfile",
                "docker-compose",
                ".travis",
                "jenkins",
                "gitlab",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeQualityRules {
    pub base: f64,
    pub single_language_bonus: f64,
    pub balanced_language_bonus: f64,
    pub balanced_language_max: usize,
    pub fragmented_language_above: usize,
    pub fragmented_penalty: f64,
    pub organization_factor: f64,
    pub message_quality_factor: f64,
    pub merged_ratio_above: f64,
    pub merged_ratio_bonus: f64,
    pub review_comments_above: f64,
    pub review_comments_bonus: f64,
}

impl Default for CodeQualityRules {
    fn default() -> Self {
        Self {
            base: 50.0,
            single_language_bonus: 10.0,
            balanced_language_bonus: 15.0,
            balanced_language_max: 3,
            fragmented_language_above: 5,
            fragmented_penalty: 10.0,
            organization_factor: 0.3,
            message_quality_factor: 0.2,
            merged_ratio_above: 0.7,
            merged_ratio_bonus: 10.0,
            review_comments_above: 1.0,
            review_comments_bonus: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentationRules {
    pub readme_factor: f64,
    pub license_bonus: f64,
    pub contributing_bonus: f64,
    /// Stands in for code-comment density; no source is read.
    pub comment_density_placeholder: f64,
    pub wiki_bonus: f64,
}

impl Default for DocumentationRules {
    fn default() -> Self {
        Self {
            readme_factor: 0.7,
            license_bonus: 10.0,
            contributing_bonus: 10.0,
            comment_density_placeholder: 10.0,
            wiki_bonus: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestingRules {
    pub has_tests_bonus: f64,
    pub test_config_bonus: f64,
    pub coverage_config_bonus: f64,
    pub many_test_files_above: usize,
    pub many_test_files_bonus: f64,
}

impl Default for TestingRules {
    fn default() -> Self {
        Self {
            has_tests_bonus: 40.0,
            test_config_bonus: 30.0,
            coverage_config_bonus: 30.0,
            many_test_files_above: 5,
            many_test_files_bonus: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiCdRules {
    pub has_ci_base: f64,
    pub config_file_bonus: f64,
    pub multiple_config_files_bonus: f64,
    pub multiple_workflows_bonus: f64,
}

impl Default for CiCdRules {
    fn default() -> Self {
        Self {
            has_ci_base: 50.0,
            config_file_bonus: 30.0,
            multiple_config_files_bonus: 20.0,
            multiple_workflows_bonus: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintainabilityRules {
    pub base: f64,
    pub fresh_days: i64,
    pub fresh_bonus: f64,
    pub recent_days: i64,
    pub recent_bonus: f64,
    pub stale_days: i64,
    pub stale_penalty: f64,
    /// Stands in for issue response time; issues are not timed.
    pub issue_response_placeholder: f64,
    /// Stands in for dependency health; manifests are not read.
    pub dependency_health_placeholder: f64,
}

impl Default for MaintainabilityRules {
    fn default() -> Self {
        Self {
            base: 50.0,
            fresh_days: 30,
            fresh_bonus: 20.0,
            recent_days: 90,
            recent_bonus: 10.0,
            stale_days: 365,
            stale_penalty: 20.0,
            issue_response_placeholder: 10.0,
            dependency_health_placeholder: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaborationRules {
    pub multiple_authors_bonus: f64,
    pub team_authors_above: usize,
    pub team_authors_bonus: f64,
    pub pull_requests_bonus: f64,
    pub merged_ratio_above: f64,
    pub merged_ratio_bonus: f64,
    pub review_comments_bonus: f64,
    pub open_issues_bonus: f64,
}

impl Default for CollaborationRules {
    fn default() -> Self {
        Self {
            multiple_authors_bonus: 20.0,
            team_authors_above: 3,
            team_authors_bonus: 20.0,
            pull_requests_bonus: 20.0,
            merged_ratio_above: 0.5,
            merged_ratio_bonus: 20.0,
            review_comments_bonus: 10.0,
            open_issues_bonus: 10.0,
        }
    }
}

/// Heuristic only: nothing is benchmarked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceRules {
    pub base: f64,
    pub small_size_below: u64,
    pub small_size_bonus: f64,
    pub few_files_below: usize,
    pub few_files_bonus: f64,
    pub compiled_languages: Vec<String>,
    pub compiled_bonus: f64,
    pub interpreted_languages: Vec<String>,
    pub native_counterparts: Vec<String>,
    pub interpreted_penalty: f64,
}

impl Default for PerformanceRules {
    fn default() -> Self {
        Self {
            base: 60.0,
            small_size_below: 10_000,
            small_size_bonus: 20.0,
            few_files_below: 100,
            few_files_bonus: 10.0,
            compiled_languages: strings(&["Rust", "Go"]),
            compiled_bonus: 10.0,
            interpreted_languages: strings(&["Python"]),
            native_counterparts: strings(&["C++"]),
            interpreted_penalty: 5.0,
        }
    }
}

/// No scanning is performed; the dimension is a fixed placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityRules {
    pub base: f64,
}

impl Default for SecurityRules {
    fn default() -> Self {
        Self { base: 70.0 }
    }
}

/// Partial `[badges.<dimension>]` tables fall back to that dimension's own
/// defaults, so overriding `gold` alone keeps the default `silver`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BadgeRulesToml")]
pub struct BadgeRules {
    pub achievement: AchievementBands,
    pub code_quality: SkillThresholds,
    pub documentation: SkillThresholds,
    pub testing: SkillThresholds,
    pub ci_cd: SkillThresholds,
    pub collaboration: SkillThresholds,
    pub special: SpecialThresholds,
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            achievement: AchievementBands::default(),
            code_quality: SkillThresholds::new(85, 70),
            documentation: SkillThresholds::new(85, 70),
            testing: SkillThresholds::new(85, 70),
            ci_cd: SkillThresholds::new(80, 60),
            collaboration: SkillThresholds::new(80, 60),
            special: SpecialThresholds::default(),
        }
    }
}

/// Lower bounds of the overall-score bands, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementBands {
    pub platinum: u8,
    pub gold: u8,
    pub silver: u8,
    pub bronze: u8,
    pub basic: u8,
}

impl Default for AchievementBands {
    fn default() -> Self {
        Self {
            platinum: 90,
            gold: 80,
            silver: 70,
            bronze: 60,
            basic: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillThresholds {
    pub gold: u8,
    pub silver: u8,
}

impl SkillThresholds {
    pub const fn new(gold: u8, silver: u8) -> Self {
        Self { gold, silver }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BadgeRulesToml {
    achievement: AchievementBands,
    code_quality: PartialSkillThresholds,
    documentation: PartialSkillThresholds,
    testing: PartialSkillThresholds,
    ci_cd: PartialSkillThresholds,
    collaboration: PartialSkillThresholds,
    special: SpecialThresholds,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PartialSkillThresholds {
    gold: Option<u8>,
    silver: Option<u8>,
}

impl PartialSkillThresholds {
    fn or(self, fallback: SkillThresholds) -> SkillThresholds {
        SkillThresholds {
            gold: self.gold.unwrap_or(fallback.gold),
            silver: self.silver.unwrap_or(fallback.silver),
        }
    }
}

impl From<BadgeRulesToml> for BadgeRules {
    fn from(raw: BadgeRulesToml) -> Self {
        let defaults = BadgeRules::default();
        Self {
            achievement: raw.achievement,
            code_quality: raw.code_quality.or(defaults.code_quality),
            documentation: raw.documentation.or(defaults.documentation),
            testing: raw.testing.or(defaults.testing),
            ci_cd: raw.ci_cd.or(defaults.ci_cd),
            collaboration: raw.collaboration.or(defaults.collaboration),
            special: raw.special,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialThresholds {
    pub commit_frequency_above: f64,
    pub total_commits_above: usize,
    pub max_code_smells: u32,
    pub test_coverage_min: f64,
    pub total_files_above: usize,
    pub language_count_min: usize,
}

impl Default for SpecialThresholds {
    fn default() -> Self {
        Self {
            commit_frequency_above: 1.0,
            total_commits_above: 100,
            max_code_smells: 0,
            test_coverage_min: 90.0,
            total_files_above: 50,
            language_count_min: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightRules {
    pub strength_min: u8,
    pub weakness_below: u8,
    pub ci_cd_weakness_below: u8,
    pub testing_recommendation_below: u8,
    pub documentation_recommendation_below: u8,
    pub ci_cd_recommendation_below: u8,
    pub positive_summary_min: u8,
    pub neutral_summary_min: u8,
    /// Roadmap priority areas are the tracked dimensions below this.
    pub roadmap_priority_below: u8,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            strength_min: 70,
            weakness_below: 50,
            ci_cd_weakness_below: 40,
            testing_recommendation_below: 60,
            documentation_recommendation_below: 60,
            ci_cd_recommendation_below: 50,
            positive_summary_min: 80,
            neutral_summary_min: 60,
            roadmap_priority_below: 70,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.version != CONFIG_VERSION {
            return Err(EngineError::ConfigParse(format!(
                "unsupported config version: {} (expected {CONFIG_VERSION})",
                self.version
            )));
        }

        for dimension in Dimension::ALL {
            let weight = self.weights.get(dimension);
            if !(0.0..=1.0).contains(&weight) {
                return Err(EngineError::ConfigParse(format!(
                    "weights.{} must be between 0.0 and 1.0",
                    dimension.key()
                )));
            }
        }
        let weight_sum = self.weights.sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(EngineError::ConfigParse(format!(
                "weights must sum to 1.0 (found {weight_sum:.3})"
            )));
        }

        let bands = &self.badges.achievement;
        let ordered = [
            bands.platinum,
            bands.gold,
            bands.silver,
            bands.bronze,
            bands.basic,
        ];
        if ordered.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(EngineError::ConfigParse(
                "badges.achievement thresholds must be strictly descending".to_string(),
            ));
        }

        for (name, thresholds) in [
            ("code_quality", &self.badges.code_quality),
            ("documentation", &self.badges.documentation),
            ("testing", &self.badges.testing),
            ("ci_cd", &self.badges.ci_cd),
            ("collaboration", &self.badges.collaboration),
        ] {
            if thresholds.gold < thresholds.silver {
                return Err(EngineError::ConfigParse(format!(
                    "badges.{name}.gold must not be below badges.{name}.silver"
                )));
            }
        }

        if self.insights.positive_summary_min <= self.insights.neutral_summary_min {
            return Err(EngineError::ConfigParse(
                "insights.positive_summary_min must be above insights.neutral_summary_min"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let cfg = ScoringConfig::default();
        assert!((cfg.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_config_validates() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: ScoringConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let toml_str = r#"
[weights]
code_quality = 0.20
security = 0.10

[badges.testing]
gold = 90
silver = 75
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.weights.code_quality, 0.20);
        assert_eq!(cfg.weights.documentation, 0.15);
        assert_eq!(cfg.badges.testing, SkillThresholds::new(90, 75));
        assert_eq!(cfg.badges.ci_cd, SkillThresholds::new(80, 60));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn single_skill_threshold_keeps_that_dimension_default() {
        let toml_str = r#"
[badges.testing]
gold = 90

[badges.ci_cd]
silver = 55
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.badges.testing, SkillThresholds::new(90, 70));
        assert_eq!(cfg.badges.ci_cd, SkillThresholds::new(80, 55));
        assert_eq!(cfg.badges.collaboration, SkillThresholds::new(80, 60));
        assert_eq!(cfg.badges.achievement, AchievementBands::default());
    }

    #[test]
    fn validate_rejects_invalid_weight_sum() {
        let toml_str = r#"
[weights]
code_quality = 0.9
documentation = 0.9
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weights must sum to 1.0"));
    }

    #[test]
    fn unknown_weight_key_is_rejected() {
        let toml_str = r#"
[weights]
velocity = 0.1
"#;
        let err = toml::from_str::<ScoringConfig>(toml_str).expect_err("unknown key should fail");
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn validate_rejects_unsupported_version() {
        let cfg: ScoringConfig = toml::from_str("version = 2").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported config version"));
    }

    #[test]
    fn validate_rejects_unordered_achievement_bands() {
        let toml_str = r#"
[badges.achievement]
gold = 95
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("strictly descending"));
    }

    #[test]
    fn validate_rejects_inverted_skill_thresholds() {
        let toml_str = r#"
[badges.ci_cd]
gold = 50
silver = 60
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("badges.ci_cd.gold"));
    }
}
