use serde::{Deserialize, Serialize};

/// Institution categories served by the admissions roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionCategory {
    School,
    College,
}

impl InstitutionCategory {
    /// Category code as stored in the session
    pub fn code(&self) -> &'static str {
        match self {
            InstitutionCategory::School => "school",
            InstitutionCategory::College => "college",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            InstitutionCategory::School => "School",
            InstitutionCategory::College => "College",
        }
    }

    /// All categories
    pub fn all() -> Vec<InstitutionCategory> {
        vec![InstitutionCategory::School, InstitutionCategory::College]
    }

    /// Parse from the session code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "school" => Some(InstitutionCategory::School),
            "college" => Some(InstitutionCategory::College),
            _ => None,
        }
    }
}

impl ToString for InstitutionCategory {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
