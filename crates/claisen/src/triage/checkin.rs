//! Daily quick check-in: a three-symptom shortlist with one piece of advice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickSymptom {
    Bloating,
    Gas,
    Heartburn,
}

impl QuickSymptom {
    pub const ALL: [QuickSymptom; 3] = [
        QuickSymptom::Bloating,
        QuickSymptom::Gas,
        QuickSymptom::Heartburn,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            QuickSymptom::Bloating => "bloating",
            QuickSymptom::Gas => "gas",
            QuickSymptom::Heartburn => "heartburn",
        }
    }

    /// Parse a comma separated selection, ignoring blanks and unknown entries.
    pub fn parse_list(raw: &str) -> Vec<QuickSymptom> {
        let mut selected: Vec<QuickSymptom> = raw
            .split(',')
            .filter_map(|item| item.parse().ok())
            .collect();
        selected.sort();
        selected.dedup();
        selected
    }
}

impl fmt::Display for QuickSymptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuickSymptom {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        QuickSymptom::ALL
            .into_iter()
            .find(|symptom| symptom.label() == normalized)
            .ok_or_else(|| format!("unknown symptom '{}'", value.trim()))
    }
}

/// Advice for a check-in. Heartburn outranks bloating, which outranks gas.
pub fn quick_advice(symptoms: &[QuickSymptom]) -> &'static str {
    if symptoms.is_empty() {
        return "No symptoms reported. Keep up the good work!";
    }
    if symptoms.contains(&QuickSymptom::Heartburn) {
        return "Heartburn detected. Consider reducing spicy or acidic foods.";
    }
    if symptoms.contains(&QuickSymptom::Bloating) {
        return "Bloating detected. Try to monitor fiber intake and hydration.";
    }
    "Gas detected. Consider tracking foods that may cause gas."
}
