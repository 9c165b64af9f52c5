use crate::shared::convert_to_string;
use std::collections::BTreeMap;

/// Emotional themes a dream can carry. Each category owns a keyword table in
/// the [`Lexicon`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EmotionCategory {
    Positive,
    Nostalgic,
    Mysterious,
    Anxious,
}

/// The fixed keyword tables used to classify and score dreams.
///
/// Built once, borrowed by every analysis call, and never mutated after
/// construction. The default tables target Portuguese-language journals, the
/// language the reference journals are written in. All keywords are lowercase
/// because matching happens against lowercased content.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub emotions: BTreeMap<EmotionCategory, Vec<String>>,
    pub future_indicators: Vec<String>,
    pub night_indicators: Vec<String>,
    pub negative_indicators: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            emotions: BTreeMap::from([
                (
                    EmotionCategory::Positive,
                    convert_to_string(vec![
                        "feliz",
                        "alegre",
                        "esperança",
                        "amor",
                        "paz",
                        "luz",
                        "voar",
                        "liberdade",
                    ]),
                ),
                (
                    EmotionCategory::Nostalgic,
                    convert_to_string(vec![
                        "passado", "infância", "memória", "saudade", "tempo", "antigo",
                    ]),
                ),
                (
                    EmotionCategory::Mysterious,
                    convert_to_string(vec![
                        "escuro",
                        "sombra",
                        "desconhecido",
                        "estranho",
                        "mágico",
                        "surreal",
                    ]),
                ),
                (
                    EmotionCategory::Anxious,
                    convert_to_string(vec![
                        "correr",
                        "perseguir",
                        "perder",
                        "cair",
                        "medo",
                        "pressa",
                        "fugir",
                    ]),
                ),
            ]),
            future_indicators: convert_to_string(vec![
                "futuro", "amanhã", "próximo", "espero", "quero", "desejo", "planejo",
            ]),
            night_indicators: convert_to_string(vec![
                "dormir", "sonhei", "pesadelo", "acordei", "noite", "cama",
            ]),
            negative_indicators: convert_to_string(vec![
                "não",
                "nunca",
                "impossível",
                "difícil",
                "problema",
                "medo",
            ]),
        }
    }
}

impl Lexicon {
    /// The table behind the positivity score's reward side.
    pub fn positive_keywords(&self) -> &[String] {
        self.emotions
            .get(&EmotionCategory::Positive)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
