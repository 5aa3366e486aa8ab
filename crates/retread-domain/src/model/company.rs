//! Client company records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client company a proposal is addressed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company fields supplied by the caller; id and timestamps are assigned on create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl NewCompany {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_contact(mut self, contact_person: impl Into<String>) -> Self {
        self.contact_person = Some(contact_person.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn into_company(self, id: String, now: DateTime<Utc>) -> Company {
        Company {
            id,
            name: self.name,
            email: self.email,
            contact_person: self.contact_person,
            phone: self.phone,
            address: self.address,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Company {
    /// Case-insensitive match on name, contact person or email
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let contains = |field: Option<&str>| {
            field
                .map(|v| v.to_lowercase().contains(&term))
                .unwrap_or(false)
        };
        contains(Some(self.name.as_str())) || contains(self.contact_person.as_deref()) || contains(self.email.as_deref())
    }

    /// Up to two uppercase initials from the company name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leclerc() -> Company {
        NewCompany::named("Transport Leclerc")
            .with_email("contact@transport-leclerc.fr")
            .with_contact("Michel Leclerc")
            .into_company("1".to_string(), Utc::now())
    }

    #[test]
    fn test_matches_name_contact_email() {
        let company = leclerc();
        assert!(company.matches("transport"));
        assert!(company.matches("MICHEL"));
        assert!(company.matches("leclerc.fr"));
        assert!(!company.matches("dubois"));
    }

    #[test]
    fn test_matches_ignores_missing_fields() {
        let company = NewCompany::named("Fleet Services SA").into_company("3".to_string(), Utc::now());
        assert!(company.matches("fleet"));
        assert!(!company.matches("@"));
    }

    #[test]
    fn test_initials() {
        assert_eq!(leclerc().initials(), "TL");
        let single = NewCompany::named("bus").into_company("x".to_string(), Utc::now());
        assert_eq!(single.initials(), "B");
    }

    #[test]
    fn test_into_company_sets_timestamps() {
        let now = Utc::now();
        let company = NewCompany::named("Logistics Plus").into_company("2".to_string(), now);
        assert_eq!(company.created_at, now);
        assert_eq!(company.updated_at, now);
        assert_eq!(company.id, "2");
    }
}
