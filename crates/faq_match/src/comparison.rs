//! Detection of questions that ask to compare two or more materials.
//!
//! Matching runs on the lowercased raw question so that commas stay visible
//! as cues. Cues are plain substrings: "or" also fires inside words such
//! as "for".

const MATERIAL_NAMES: &[&str] = &[
    "mdf",
    "hdhmr",
    "boilo",
    "particle board",
    "particleboard",
    "wood",
];

const COMPARISON_CUES: &[&str] = &[
    "vs",
    "versus",
    "compare",
    "difference",
    "between",
    "better",
    "stronger",
    "comparison",
    "differ",
    "or",
    ",",
    "and",
];

/// Material names mentioned in `question`, in table order.
pub fn mentioned_materials(question: &str) -> Vec<&'static str> {
    let lowered = question.to_lowercase();
    MATERIAL_NAMES
        .iter()
        .copied()
        .filter(|name| lowered.contains(name))
        .collect()
}

pub fn has_comparison_cue(question: &str) -> bool {
    let lowered = question.to_lowercase();
    COMPARISON_CUES.iter().any(|cue| lowered.contains(cue))
}

/// True when at least two distinct materials and a comparison cue appear.
pub fn is_comparison_question(question: &str) -> bool {
    mentioned_materials(question).len() >= 2 && has_comparison_cue(question)
}
