//! Instruction template for strategy advice.

use crate::domain::canvas::Factor;

/// Shown in place of advice when the provider call fails.
pub const ADVICE_FALLBACK_MESSAGE: &str =
    "Entschuldigung, die Analyse konnte nicht geladen werden.";

/// Builds the natural-language instruction embedding the factor list.
pub fn advice_prompt(factors: &[Factor]) -> String {
    let lines = factors
        .iter()
        .map(|f| {
            format!(
                "- {}: Aktuell {}, Ziel {}",
                f.name, f.ist_value, f.soll_value
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analysiere diese Blue Ocean Strategie-Konturen.\n\
         Hier sind die Berührungspunkte mit (IST, SOLL) Werten (Skala 0-5):\n\
         {lines}\n\
         \n\
         Bitte gib eine kurze, prägnante Einschätzung (max 150 Wörter):\n\
         1. Wo entsteht der größte neue Wert (Value Innovation)?\n\
         2. Ist die Differenzierung gegenüber dem Branchenstandard (Niveau 3) deutlich genug?\n\
         3. Empfehlung für den nächsten Schritt.\n\
         \n\
         Antworte auf Deutsch und verwende eine professionelle Berater-Tonalität. \
         Nutze den Begriff \"Berührungspunkte\" statt \"Faktoren\"."
    )
}
