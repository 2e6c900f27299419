use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentorId(pub String);

impl fmt::Display for MentorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorType {
    District,
    Provincial,
    National,
}

impl MentorType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::District => "District Mentor",
            Self::Provincial => "Provincial Mentor",
            Self::National => "National Mentor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    pub phone: String,
    pub mentor_type: MentorType,
    pub district: Option<String>,
}

impl Mentor {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// District mentors available to the entry form.
pub fn mentor_roster() -> Vec<Mentor> {
    [
        ("dewi", "Dewi Suryani", "+62 812 0000 0101"),
        ("budi", "Budi Santoso", "+62 812 0000 0102"),
        ("rina", "Rina Wijaya", "+62 812 0000 0103"),
    ]
    .into_iter()
    .map(|(id, name, phone)| Mentor {
        id: MentorId(id.to_string()),
        name: name.to_string(),
        phone: phone.to_string(),
        mentor_type: MentorType::District,
        district: Some("East Jakarta".to_string()),
    })
    .collect()
}
