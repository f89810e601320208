use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FleetError {
    #[error("Unknown move strategy '{name}'{}", hint(.suggestion))]
    UnknownStrategy {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Unknown vehicle kind '{name}'{}", hint(.suggestion))]
    UnknownVehicle {
        name: String,
        suggestion: Option<String>,
    },

    #[error("No vehicle at index {index} (only {spawned} spawned so far)")]
    NoSuchVehicle { index: usize, spawned: usize },

    #[error("Failed to parse {format} scenario: {message}")]
    Parse { format: &'static str, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

impl FleetError {
    pub fn unknown_strategy(name: impl Into<String>, known: &[&str]) -> Self {
        let name = name.into();
        let suggestion = find_similar_name(&name, known);
        Self::UnknownStrategy { name, suggestion }
    }

    pub fn unknown_vehicle(name: impl Into<String>, known: &[&str]) -> Self {
        let name = name.into();
        let suggestion = find_similar_name(&name, known);
        Self::UnknownVehicle { name, suggestion }
    }
}

impl From<toml::de::Error> for FleetError {
    fn from(err: toml::de::Error) -> Self {
        FleetError::Parse {
            format: "TOML",
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Parse {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Typo suggestions
// =============================================================================

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        curr[0] = i;
        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest entry of `known` within an edit distance of 2, if any.
pub fn find_similar_name(typo: &str, known: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;
    let typo = typo.trim().to_ascii_lowercase();

    known
        .iter()
        .map(|&candidate| (levenshtein_distance(&typo, candidate), candidate))
        .filter(|&(distance, _)| distance <= MAX_DISTANCE)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein_distance("", "fast"), 4);
        assert_eq!(levenshtein_distance("fast", ""), 4);
        assert_eq!(levenshtein_distance("fast", "fast"), 0);
        assert_eq!(levenshtein_distance("fsat", "fast"), 2);
        assert_eq!(levenshtein_distance("normla", "normal"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_suggestion_picks_closest() {
        let known = ["fast", "normal", "none"];
        assert_eq!(find_similar_name("fats", &known), Some("fast".to_string()));
        assert_eq!(find_similar_name("NORMAL", &known), Some("normal".to_string()));
        assert_eq!(find_similar_name(" Fats ", &known), Some("fast".to_string()));
        assert_eq!(find_similar_name("teleport", &known), None);
    }

    #[test]
    fn test_unknown_strategy_display_with_hint() {
        let err = FleetError::unknown_strategy("fsat", &["fast", "normal"]);
        let display = err.to_string();
        assert!(display.contains("'fsat'"));
        assert!(display.contains("did you mean 'fast'"));
    }

    #[test]
    fn test_unknown_vehicle_display_without_hint() {
        let err = FleetError::unknown_vehicle("hovercraft", &["bike", "car"]);
        assert_eq!(err.to_string(), "Unknown vehicle kind 'hovercraft'");
    }

    #[test]
    fn test_no_such_vehicle_display() {
        let err = FleetError::NoSuchVehicle { index: 4, spawned: 2 };
        let display = err.to_string();
        assert!(display.contains("index 4"));
        assert!(display.contains("only 2 spawned"));
    }

    #[test]
    fn test_toml_error_converts() {
        let err: FleetError = toml::from_str::<toml::Value>("step = [").unwrap_err().into();
        assert!(matches!(err, FleetError::Parse { format: "TOML", .. }));
    }

    #[test]
    fn test_toml_error_reports_location() {
        let err: FleetError = toml::from_str::<toml::Value>("a = 1\nb = =\n").unwrap_err().into();
        let FleetError::Parse { message, .. } = err else {
            panic!("expected a parse error");
        };
        assert!(message.contains("line 2"), "message was: {message}");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<FleetError>();
        assert_sync::<FleetError>();
    }
}
