//! # Registration records
//!
//! Wire types for the registration API plus the pure helpers the admin view
//! builds on (age computation, list filtering). Field names on the wire are
//! camelCase (`dateBirth`, `churchName`, `imageAuthorization`, `createdAt`).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Attendee gender as stored by the registration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculino,
    Feminino,
}

impl Gender {
    /// Display label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
        }
    }

    /// Wire value, as the API stores it.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Feminino => "feminino",
        }
    }

    /// Parse a `<select>` value; anything else (including "all") is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "masculino" => Some(Gender::Masculino),
            "feminino" => Some(Gender::Feminino),
            _ => None,
        }
    }
}

/// A persisted attendee registration, as returned by the API.
///
/// `email` is the unique key across records; the server enforces that, the
/// client only advises via the pre-submission lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, with = "opt_date")]
    pub date_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub church_name: String,
    pub work: String,
    #[serde(default)]
    pub hosting: bool,
    #[serde(default)]
    pub image_authorization: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Registration {
    /// Completed-years age today, when a birth date is on file.
    pub fn age(&self) -> Option<i32> {
        self.date_birth
            .map(|birth| age_on(birth, chrono::Local::now().date_naive()))
    }

    /// Up to two uppercase initials for the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// `created_at` formatted for display, when present.
    pub fn created_at_display(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format("%d/%m/%Y %H:%M").to_string())
    }
}

/// The client-side form payload: a [`Registration`] minus the server-owned
/// fields. `date_birth` stays the raw `<input type="date">` value so an
/// untouched field posts as an empty string, the way the API expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub name: String,
    pub date_birth: String,
    pub gender: Option<Gender>,
    pub phone: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub church_name: String,
    pub work: String,
    pub hosting: bool,
    pub image_authorization: bool,
}

impl RegistrationDraft {
    /// Repopulate the form from an already-registered record, for the
    /// edit-and-resubmit flow.
    pub fn from_record(record: &Registration) -> Self {
        Self {
            name: record.name.clone(),
            date_birth: record
                .date_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            gender: Some(record.gender),
            phone: record.phone.clone(),
            email: record.email.clone(),
            state: record.state.clone(),
            city: record.city.clone(),
            church_name: record.church_name.clone(),
            work: record.work.clone(),
            hosting: record.hosting,
            image_authorization: record.image_authorization,
        }
    }
}

/// Whole years completed between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Apply the admin filters: case-insensitive substring search over
/// name/email/city/church, exact gender match, exact hosting match.
/// Filters compose with AND; `None` / empty search means "all".
pub fn filter_registrations(
    records: &[Registration],
    search: &str,
    gender: Option<Gender>,
    hosting: Option<bool>,
) -> Vec<Registration> {
    let needle = search.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
                || r.city.to_lowercase().contains(&needle)
                || r.church_name.to_lowercase().contains(&needle)
        })
        .filter(|r| gender.map_or(true, |g| r.gender == g))
        .filter(|r| hosting.map_or(true, |h| r.hosting == h))
        .cloned()
        .collect()
}

/// Serde adapter: `dateBirth` may arrive as a date string, an empty string,
/// or null; empty means absent.
mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, city: &str, gender: Gender, hosting: bool) -> Registration {
        Registration {
            id: None,
            name: name.to_string(),
            date_birth: None,
            gender,
            phone: "(11) 99999-9999".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            state: "MA".to_string(),
            city: city.to_string(),
            church_name: "First Church".to_string(),
            work: "Volunteer".to_string(),
            hosting,
            image_authorization: true,
            created_at: None,
        }
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let later = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

        assert_eq!(age_on(birth, day_before), 24);
        assert_eq!(age_on(birth, birthday), 25);
        assert_eq!(age_on(birth, later), 25);
    }

    #[test]
    fn filters_compose_with_and() {
        let records = vec![
            record("Ana", "Rio", Gender::Masculino, true),
            record("Beto", "Rio", Gender::Feminino, false),
        ];

        let out = filter_registrations(&records, "Rio", Some(Gender::Feminino), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Beto");
    }

    #[test]
    fn empty_search_restores_everything() {
        let records = vec![
            record("Ana", "Rio", Gender::Masculino, true),
            record("Beto", "Imperatriz", Gender::Feminino, false),
        ];

        let narrowed = filter_registrations(&records, "rio", None, None);
        assert_eq!(narrowed.len(), 1);

        let restored = filter_registrations(&records, "", None, None);
        assert_eq!(restored, records);
    }

    #[test]
    fn search_matches_any_of_the_four_fields() {
        let records = vec![record("Ana", "Imperatriz", Gender::Feminino, false)];

        assert_eq!(filter_registrations(&records, "ANA", None, None).len(), 1);
        assert_eq!(filter_registrations(&records, "ana@", None, None).len(), 1);
        assert_eq!(filter_registrations(&records, "imperat", None, None).len(), 1);
        assert_eq!(filter_registrations(&records, "first ch", None, None).len(), 1);
        assert_eq!(filter_registrations(&records, "nowhere", None, None).len(), 0);
    }

    #[test]
    fn hosting_filter_is_exact() {
        let records = vec![
            record("Ana", "Rio", Gender::Feminino, true),
            record("Beto", "Rio", Gender::Masculino, false),
        ];

        let hosts = filter_registrations(&records, "", None, Some(true));
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "Ana");

        let non_hosts = filter_registrations(&records, "", None, Some(false));
        assert_eq!(non_hosts.len(), 1);
        assert_eq!(non_hosts[0].name, "Beto");
    }

    #[test]
    fn wire_shape_is_camel_case_with_lowercase_gender() {
        let json = serde_json::to_value(&record("Ana", "Rio", Gender::Feminino, true)).unwrap();
        assert_eq!(json["gender"], "feminino");
        assert_eq!(json["churchName"], "First Church");
        assert_eq!(json["imageAuthorization"], true);
        assert_eq!(json["dateBirth"], "");
    }

    #[test]
    fn empty_date_birth_deserializes_as_absent() {
        let json = r#"{
            "name": "Ana",
            "dateBirth": "",
            "gender": "feminino",
            "phone": "1",
            "email": "ana@example.com",
            "state": "MA",
            "city": "Rio",
            "churchName": "First Church",
            "work": "Volunteer",
            "hosting": false,
            "imageAuthorization": true
        }"#;
        let record: Registration = serde_json::from_str(json).unwrap();
        assert_eq!(record.date_birth, None);

        let json = json.replace(r#""dateBirth": """#, r#""dateBirth": "2000-06-15""#);
        let record: Registration = serde_json::from_str(&json).unwrap();
        assert_eq!(record.date_birth, NaiveDate::from_ymd_opt(2000, 6, 15));
    }

    #[test]
    fn draft_from_record_copies_every_editable_field() {
        let mut source = record("Ana Clara", "Rio", Gender::Feminino, true);
        source.date_birth = NaiveDate::from_ymd_opt(2000, 6, 15);

        let draft = RegistrationDraft::from_record(&source);
        assert_eq!(draft.name, "Ana Clara");
        assert_eq!(draft.date_birth, "2000-06-15");
        assert_eq!(draft.gender, Some(Gender::Feminino));
        assert_eq!(draft.email, source.email);
        assert_eq!(draft.church_name, source.church_name);
        assert!(draft.hosting);
    }

    #[test]
    fn blank_draft_defaults() {
        let draft = RegistrationDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.gender.is_none());
        assert!(!draft.hosting);
        assert!(!draft.image_authorization);
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(record("ana clara souza", "Rio", Gender::Feminino, false).initials(), "AC");
        assert_eq!(record("Beto", "Rio", Gender::Masculino, false).initials(), "B");
    }
}
