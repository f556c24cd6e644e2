use serde::Serialize;

/// Suggested questions for the UI, grouped by category. Stable and enumerable.
#[derive(Debug, Clone, Serialize)]
pub struct PresetQuestions {
    pub technical: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub experience: &'static [&'static str],
    pub portfolio: &'static [&'static str],
}

pub const PRESET_QUESTIONS: PresetQuestions = PresetQuestions {
    technical: &[
        "Quali sono le tue competenze principali?",
        "Che software sai utilizzare?",
        "Quali linguaggi di programmazione conosci?",
    ],
    strengths: &[
        "Quali sono i tuoi punti di forza?",
        "Come affronti un problema nuovo?",
    ],
    experience: &[
        "Raccontami della tua esperienza lavorativa",
        "Qual è la tua formazione?",
        "Sei disponibile per nuove opportunità?",
    ],
    portfolio: &[
        "Quali progetti hai realizzato?",
        "Puoi mostrarmi lavori di fotoritocco?",
        "Hai esempi di montaggio video?",
    ],
};
