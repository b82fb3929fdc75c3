//! Keyword tables of the dialects the reference reader understands

use super::super::Keywords;

/// Keyword synonyms of one spoken language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub code: &'static str,
    pub feature: &'static [&'static str],
    pub background: &'static [&'static str],
    pub scenario: &'static [&'static str],
    pub outline: &'static [&'static str],
    pub examples: &'static [&'static str],
    /// Given, When, Then, And, But and the universal `*`
    pub steps: &'static [&'static str],
}

const ENGLISH: Dialect = Dialect {
    code: "en",
    feature: &["Feature", "Business Need", "Ability"],
    background: &["Background"],
    scenario: &["Scenario", "Example"],
    outline: &["Scenario Outline", "Scenario Template"],
    examples: &["Examples", "Scenarios"],
    steps: &["Given", "When", "Then", "And", "But", "*"],
};

const AUSTRALIAN: Dialect = Dialect {
    code: "en-au",
    feature: &["Pretty much"],
    background: &["First off"],
    scenario: &["Awww, look mate"],
    outline: &["Reckon it's like"],
    examples: &["You'll wanna"],
    steps: &[
        "Y'know",
        "It's just unbelievable",
        "But at the end of the day I reckon",
        "Too right",
        "Yeah nah",
        "*",
    ],
};

const FRENCH: Dialect = Dialect {
    code: "fr",
    feature: &["Fonctionnalité"],
    background: &["Contexte"],
    scenario: &["Scénario", "Exemple"],
    outline: &["Plan du scénario", "Plan du Scénario"],
    examples: &["Exemples"],
    steps: &[
        "Soit",
        "Sachant que",
        "Étant donné que",
        "Étant donné",
        "Quand",
        "Lorsque",
        "Alors",
        "Et",
        "Mais",
        "*",
    ],
};

static DIALECTS: [Dialect; 3] = [ENGLISH, AUSTRALIAN, FRENCH];

impl Dialect {
    pub fn find(code: &str) -> Option<&'static Dialect> {
        DIALECTS.iter().find(|dialect| dialect.code == code)
    }

    pub fn codes() -> Vec<&'static str> {
        DIALECTS.iter().map(|dialect| dialect.code).collect()
    }

    pub fn keywords(&self) -> Keywords {
        Keywords {
            feature: self.feature[0].to_string(),
            background: self.background[0].to_string(),
            scenario: self.scenario[0].to_string(),
            outline: self.outline[0].to_string(),
            examples: self.examples[0].to_string(),
            step: "*".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dialect() {
        assert_eq!(Dialect::find("en-au").map(|d| d.feature[0]), Some("Pretty much"));
        assert!(Dialect::find("tlh").is_none());
        assert_eq!(Dialect::codes(), vec!["en", "en-au", "fr"]);
    }

    #[test]
    fn test_primary_keywords() {
        let keywords = Dialect::find("fr").map(Dialect::keywords).unwrap();
        assert_eq!(keywords.outline, "Plan du scénario");
        assert_eq!(keywords.step, "*");
    }
}
