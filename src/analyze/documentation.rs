use crate::scan::Facts;
use crate::types::config::DocumentationRules;
use crate::types::scoring::{clamp_score, Score};

pub fn documentation_score(facts: &Facts, rules: &DocumentationRules) -> Score {
    let mut score = f64::from(facts.readme.score) * rules.readme_factor;
    if facts.has_license() {
        score += rules.license_bonus;
    }
    if facts.structure.has_contributing {
        score += rules.contributing_bonus;
    }
    score += rules.comment_density_placeholder;
    if facts.attributes.has_wiki {
        score += rules.wiki_bonus;
    }
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_facts_only_earn_the_placeholder() {
        assert_eq!(
            documentation_score(&Facts::default(), &DocumentationRules::default()),
            10.0
        );
    }

    #[test]
    fn readme_license_contributing_and_wiki_add_up() {
        let mut facts = Facts::default();
        facts.readme.score = 80;
        facts.structure.has_license = true;
        facts.structure.has_contributing = true;
        facts.attributes.has_wiki = true;
        let score = documentation_score(&facts, &DocumentationRules::default());
        assert!((score - 91.0).abs() < 1e-9);
    }
}
