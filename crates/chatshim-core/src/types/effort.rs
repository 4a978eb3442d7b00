use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reasoning effort hint for reasoning models.
///
/// Unknown levels are kept verbatim so newer backends still receive them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
    Other(String),
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(level) => level,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<&str> for ReasoningEffort {
    fn from(level: &str) -> Self {
        match level {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ReasoningEffort {
    fn from(level: String) -> Self {
        Self::from(level.as_str())
    }
}

impl std::fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReasoningEffort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReasoningEffort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = String::deserialize(deserializer)?;
        Ok(Self::from(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(ReasoningEffort::from("high"), ReasoningEffort::High);
        assert_eq!(ReasoningEffort::Medium.as_str(), "medium");
    }

    #[test]
    fn test_unknown_level_preserved() {
        let effort: ReasoningEffort = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(effort, ReasoningEffort::Other("minimal".to_string()));
        assert_eq!(serde_json::to_string(&effort).unwrap(), "\"minimal\"");
    }

    #[test]
    fn test_empty_level() {
        assert!(ReasoningEffort::from("").is_empty());
        assert!(!ReasoningEffort::Low.is_empty());
    }
}
