use super::taxonomy::Taxonomy;
use super::types::SkillCounts;

/// How many taxonomy terms a suggestion recommends
const EXAMPLE_TERMS: usize = 3;

/// Builds improvement suggestions from `counts`. Never returns an empty list.
///
/// Missing categories come first, then categories with a single matched
/// term; both groups keep taxonomy order. Category names are quoted exactly
/// as the taxonomy spells them.
pub fn suggest_improvements(counts: &SkillCounts, taxonomy: &Taxonomy) -> Vec<String> {
    let missing: Vec<&str> = counts
        .iter()
        .filter(|c| !c.is_covered())
        .map(|c| c.name.as_str())
        .collect();

    let mut suggestions = Vec::new();

    if missing.is_empty() {
        suggestions.push(format!(
            "Great coverage: all {} skill categories are represented.",
            counts.len()
        ));
    } else if missing.len() > 1 {
        suggestions.push(format!(
            "Your resume is missing {} of {} skill categories: {}.",
            missing.len(),
            counts.len(),
            missing.join(", ")
        ));
    }

    for name in &missing {
        let examples = example_terms(taxonomy, name, None);
        if examples.is_empty() {
            suggestions.push(format!("Add skills in the '{}' category.", name));
        } else {
            suggestions.push(format!(
                "Add skills in the '{}' category, e.g. {}.",
                name,
                examples.join(", ")
            ));
        }
    }

    for category in counts.iter().filter(|c| c.distinct_terms() == 1) {
        let Some(matched) = category.terms.keys().next() else {
            continue;
        };
        let others = example_terms(taxonomy, &category.name, Some(matched.as_str()));
        if others.is_empty() {
            continue;
        }
        suggestions.push(format!(
            "Consider broadening your '{}' skills beyond {}, e.g. {}.",
            category.name,
            matched,
            others.join(", ")
        ));
    }

    suggestions
}

fn example_terms<'a>(taxonomy: &'a Taxonomy, category: &str, skip: Option<&str>) -> Vec<&'a str> {
    taxonomy
        .category(category)
        .map(|c| {
            c.terms
                .iter()
                .map(String::as_str)
                .filter(|t| Some(*t) != skip)
                .take(EXAMPLE_TERMS)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_with(entries: &[(&str, &str, usize)]) -> (Taxonomy, SkillCounts) {
        let taxonomy = Taxonomy::builtin();
        let mut counts = SkillCounts::empty(&taxonomy);
        for (category, term, n) in entries {
            counts.record(category, term, *n);
        }
        (taxonomy, counts)
    }

    #[test]
    fn test_missing_categories_mentioned() {
        let (taxonomy, counts) = counts_with(&[
            ("Programming Languages", "python", 2),
            ("Databases", "sql", 1),
        ]);
        let suggestions = suggest_improvements(&counts, &taxonomy);
        assert!(!suggestions.is_empty());

        let text = suggestions.join(" ").to_lowercase();
        assert!(text.contains("categories"));
        for missing in [
            "Web Technologies",
            "Cloud & DevOps",
            "Data Science & ML",
            "Tools & Frameworks",
        ] {
            assert!(
                suggestions.iter().any(|s| s.contains(&format!("'{missing}'"))),
                "no suggestion for {missing}"
            );
        }
    }

    #[test]
    fn test_missing_before_broadening() {
        let (taxonomy, counts) = counts_with(&[("Databases", "sql", 1)]);
        let suggestions = suggest_improvements(&counts, &taxonomy);
        let first_missing = suggestions
            .iter()
            .position(|s| s.starts_with("Add skills"))
            .unwrap();
        let broaden = suggestions
            .iter()
            .position(|s| s.starts_with("Consider broadening"))
            .unwrap();
        assert!(first_missing < broaden);
        assert!(suggestions[broaden].contains("'Databases'"));
        assert!(suggestions[broaden].contains("beyond sql"));
        assert!(!suggestions[broaden].contains("e.g. sql"));
    }

    #[test]
    fn test_missing_follow_taxonomy_order() {
        let (taxonomy, counts) = counts_with(&[]);
        let suggestions = suggest_improvements(&counts, &taxonomy);
        let positions: Vec<usize> = taxonomy
            .categories()
            .iter()
            .map(|c| {
                suggestions
                    .iter()
                    .position(|s| s.starts_with(&format!("Add skills in the '{}'", c.name)))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(suggestions.len(), taxonomy.len() + 1);
    }

    #[test]
    fn test_single_missing_category_gets_one_suggestion() {
        let (taxonomy, counts) = counts_with(&[
            ("Programming Languages", "python", 1),
            ("Programming Languages", "java", 1),
            ("Web Technologies", "react", 1),
            ("Web Technologies", "css", 1),
            ("Databases", "sql", 1),
            ("Databases", "redis", 1),
            ("Cloud & DevOps", "aws", 1),
            ("Cloud & DevOps", "docker", 1),
            ("Data Science & ML", "pandas", 1),
            ("Data Science & ML", "numpy", 1),
        ]);
        let suggestions = suggest_improvements(&counts, &taxonomy);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("'Tools & Frameworks'"));
        assert!(suggestions[0].contains("e.g. git, linux, jira"));
    }

    #[test]
    fn test_positive_message_when_nothing_missing() {
        let (taxonomy, counts) = counts_with(&[
            ("Programming Languages", "python", 1),
            ("Programming Languages", "rust", 1),
            ("Web Technologies", "react", 1),
            ("Web Technologies", "css", 1),
            ("Databases", "sql", 1),
            ("Databases", "redis", 1),
            ("Cloud & DevOps", "aws", 1),
            ("Cloud & DevOps", "docker", 1),
            ("Data Science & ML", "pandas", 1),
            ("Data Science & ML", "numpy", 1),
            ("Tools & Frameworks", "git", 1),
            ("Tools & Frameworks", "vim", 1),
        ]);
        let suggestions = suggest_improvements(&counts, &taxonomy);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("all 6 skill categories"));
    }
}
