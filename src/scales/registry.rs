//! Scale registry.
//!
//! Declares every supported readability scale: how to compute it, how to
//! validate its input, and how to interpret the score. The registry is an
//! ordered list built once and shared for the process lifetime.

use std::sync::LazyLock;

use crate::scales::clarify::{
    ari_grade_band, dale_chall_band, flesch_reading_ease_band, grade_level_description,
};
use crate::scales::definition::{Alignment, ScaleDefinition, Score, StatusLineConfig};
use crate::scales::formulas;
use crate::text;

static SHARED: LazyLock<ScaleRegistry> = LazyLock::new(ScaleRegistry::new);

/// Ordered registry of all known scales.
pub struct ScaleRegistry {
    scales: Vec<ScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a registry with the built-in scales, in presentation order.
    pub fn new() -> Self {
        let scales = vec![
            ScaleDefinition {
                id: "syllable-count",
                label: "Syllable Count",
                compute: compute_syllable_count,
                precheck: None,
                clarify: None,
                status_line: Some(StatusLineConfig {
                    alignment: Alignment::Left,
                    priority: 25,
                }),
            },
            ScaleDefinition {
                id: "lexicon-count",
                label: "Lexicon Count",
                compute: compute_lexicon_count,
                precheck: None,
                clarify: None,
                status_line: None,
            },
            ScaleDefinition {
                id: "sentence-count",
                label: "Sentence Count",
                compute: compute_sentence_count,
                precheck: None,
                clarify: None,
                status_line: None,
            },
            ScaleDefinition {
                id: "flesch-reading-ease",
                label: "Flesch Reading Ease",
                compute: compute_flesch_reading_ease,
                precheck: None,
                clarify: Some(flesch_reading_ease_band),
                status_line: None,
            },
            ScaleDefinition {
                id: "flesch-kincaid",
                label: "Flesch-Kincaid Grade Level",
                compute: compute_flesch_kincaid,
                precheck: None,
                clarify: Some(grade_level_description),
                status_line: None,
            },
            ScaleDefinition {
                id: "gunning-fog",
                label: "Gunning FOG Formula",
                compute: compute_gunning_fog,
                precheck: None,
                clarify: Some(grade_level_description),
                status_line: None,
            },
            ScaleDefinition {
                id: "smog-index",
                label: "SMOG Index",
                compute: compute_smog_index,
                precheck: Some(smog_precheck),
                clarify: Some(grade_level_description),
                status_line: None,
            },
            ScaleDefinition {
                id: "automated-readability-index",
                label: "Automated Readability Index",
                compute: compute_ari,
                precheck: None,
                clarify: Some(ari_grade_band),
                status_line: None,
            },
            ScaleDefinition {
                id: "coleman-liau",
                label: "Coleman-Liau Index",
                compute: compute_coleman_liau,
                precheck: None,
                clarify: Some(grade_level_description),
                status_line: None,
            },
            ScaleDefinition {
                id: "linsear-write",
                label: "Linsear Write Formula",
                compute: compute_linsear_write,
                precheck: None,
                clarify: Some(grade_level_description),
                status_line: None,
            },
            ScaleDefinition {
                id: "dale-chall",
                label: "Dale-Chall Readability Score",
                compute: compute_dale_chall,
                precheck: None,
                clarify: Some(dale_chall_band),
                status_line: None,
            },
            ScaleDefinition {
                id: "readability-consensus",
                label: "Readability Consensus",
                compute: compute_consensus,
                precheck: Some(non_empty_precheck),
                clarify: None,
                status_line: Some(StatusLineConfig {
                    alignment: Alignment::Left,
                    priority: 25,
                }),
            },
        ];

        Self { scales }
    }

    /// The process-wide registry.
    pub fn shared() -> &'static ScaleRegistry {
        &SHARED
    }

    /// Look up a scale by id.
    pub fn get(&self, id: &str) -> Option<&ScaleDefinition> {
        self.scales.iter().find(|scale| scale.id == id)
    }

    /// Iterate scales in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter()
    }

    /// All known scale ids, in registration order.
    pub fn known_ids(&self) -> Vec<&'static str> {
        self.scales.iter().map(|scale| scale.id).collect()
    }

    /// Scales pinned to the status line, ordered by alignment (left first)
    /// then descending priority.
    pub fn status_line_scales(&self) -> Vec<&ScaleDefinition> {
        let mut pinned: Vec<(&ScaleDefinition, StatusLineConfig)> = self
            .scales
            .iter()
            .filter_map(|scale| scale.status_line.map(|config| (scale, config)))
            .collect();
        pinned.sort_by_key(|(_, config)| {
            (config.alignment == Alignment::Right, -config.priority)
        });
        pinned.into_iter().map(|(scale, _)| scale).collect()
    }

    /// Number of registered scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Append a scale directly (test-only).
    #[cfg(test)]
    pub(crate) fn push(&mut self, scale: ScaleDefinition) {
        self.scales.push(scale);
    }
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_syllable_count(text: &str) -> Score {
    Score::Numeric(text::syllable_count(text) as f64)
}

fn compute_lexicon_count(text: &str) -> Score {
    Score::Numeric(text::lexicon_count(text) as f64)
}

fn compute_sentence_count(text: &str) -> Score {
    Score::Numeric(text::sentence_count(text) as f64)
}

fn compute_flesch_reading_ease(text: &str) -> Score {
    Score::Numeric(formulas::flesch_reading_ease(text))
}

fn compute_flesch_kincaid(text: &str) -> Score {
    Score::Numeric(formulas::flesch_kincaid_grade(text))
}

fn compute_gunning_fog(text: &str) -> Score {
    Score::Numeric(formulas::gunning_fog(text))
}

fn compute_smog_index(text: &str) -> Score {
    Score::Numeric(formulas::smog_index(text))
}

fn compute_ari(text: &str) -> Score {
    Score::Numeric(formulas::automated_readability_index(text))
}

fn compute_coleman_liau(text: &str) -> Score {
    Score::Numeric(formulas::coleman_liau_index(text))
}

fn compute_linsear_write(text: &str) -> Score {
    Score::Numeric(formulas::linsear_write_formula(text))
}

fn compute_dale_chall(text: &str) -> Score {
    Score::Numeric(formulas::dale_chall_readability_score(text))
}

fn compute_consensus(text: &str) -> Score {
    Score::Text(formulas::readability_consensus(text))
}

fn smog_precheck(text: &str) -> Option<String> {
    let sentences = text::sentence_count(text);
    if sentences < 30 {
        Some(format!(
            "Invalid - Need >= 30 sentences, found {sentences}"
        ))
    } else {
        None
    }
}

fn non_empty_precheck(text: &str) -> Option<String> {
    if text.is_empty() {
        Some("Invalid - Need text".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_new_has_builtins() {
        let registry = ScaleRegistry::new();
        let ids = registry.known_ids();
        assert!(ids.contains(&"syllable-count"));
        assert!(ids.contains(&"lexicon-count"));
        assert!(ids.contains(&"sentence-count"));
        assert!(ids.contains(&"flesch-reading-ease"));
        assert!(ids.contains(&"flesch-kincaid"));
        assert!(ids.contains(&"gunning-fog"));
        assert!(ids.contains(&"smog-index"));
        assert!(ids.contains(&"automated-readability-index"));
        assert!(ids.contains(&"coleman-liau"));
        assert!(ids.contains(&"linsear-write"));
        assert!(ids.contains(&"dale-chall"));
        assert!(ids.contains(&"readability-consensus"));
    }

    #[test]
    fn registry_ids_are_unique() {
        let registry = ScaleRegistry::new();
        let mut ids = registry.known_ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn registry_get_known_returns_some() {
        let registry = ScaleRegistry::new();
        assert!(registry.get("smog-index").is_some());
        assert!(registry.get("readability-consensus").is_some());
    }

    #[test]
    fn registry_get_unknown_returns_none() {
        let registry = ScaleRegistry::new();
        assert!(registry.get("nonexistent-scale").is_none());
    }

    #[test]
    fn registry_order_is_stable() {
        let registry = ScaleRegistry::new();
        let ids = registry.known_ids();
        assert_eq!(ids.first(), Some(&"syllable-count"));
        assert_eq!(ids.last(), Some(&"readability-consensus"));
    }

    #[test]
    fn shared_registry_is_singleton() {
        let a = ScaleRegistry::shared() as *const ScaleRegistry;
        let b = ScaleRegistry::shared() as *const ScaleRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn status_line_scales_are_the_pinned_pair() {
        let registry = ScaleRegistry::new();
        let pinned: Vec<&str> = registry
            .status_line_scales()
            .iter()
            .map(|scale| scale.id)
            .collect();
        assert_eq!(pinned, vec!["syllable-count", "readability-consensus"]);
    }

    #[test]
    fn smog_precheck_rejects_short_texts() {
        let text = "One sentence. ".repeat(29);
        assert_eq!(
            smog_precheck(&text),
            Some("Invalid - Need >= 30 sentences, found 29".to_string())
        );
    }

    #[test]
    fn smog_precheck_accepts_thirty_sentences() {
        let text = "One sentence. ".repeat(30);
        assert_eq!(smog_precheck(&text), None);
    }

    #[test]
    fn consensus_precheck_rejects_empty() {
        assert_eq!(
            non_empty_precheck(""),
            Some("Invalid - Need text".to_string())
        );
    }

    #[test]
    fn consensus_precheck_accepts_any_text() {
        assert_eq!(non_empty_precheck("words"), None);
    }

    #[test]
    fn counts_compute_whole_numbers() {
        let registry = ScaleRegistry::new();
        let scale = registry.get("lexicon-count").unwrap();
        assert_eq!((scale.compute)("one two three"), Score::Numeric(3.0));
    }

    #[test]
    fn grade_scales_carry_clarify() {
        let registry = ScaleRegistry::new();
        for id in [
            "flesch-kincaid",
            "gunning-fog",
            "smog-index",
            "coleman-liau",
            "linsear-write",
        ] {
            let scale = registry.get(id).unwrap();
            let clarify = scale.clarify.expect("grade scale has clarify");
            assert_eq!(clarify(9.0), "High school freshman");
        }
    }

    #[test]
    fn consensus_has_no_clarify() {
        let registry = ScaleRegistry::new();
        let scale = registry.get("readability-consensus").unwrap();
        assert!(scale.clarify.is_none());
    }
}
