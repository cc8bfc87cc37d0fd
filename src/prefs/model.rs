//! User preference record and patch-merge semantics.

use serde::{Deserialize, Serialize};

/// The type of home the user lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Other,
}

impl HomeType {
    /// Display label for dashboard copy ("Condo in Milton, ON").
    pub fn display(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::Other => "Home",
        }
    }
}

impl std::str::FromStr for HomeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(Self::House),
            "apartment" => Ok(Self::Apartment),
            "condo" => Ok(Self::Condo),
            "townhouse" => Ok(Self::Townhouse),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for HomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// The user's cumulative onboarding/settings answers.
///
/// Every field is optional. Writers never replace the stored record wholesale:
/// a partial record is merged field-by-field over the existing one (see
/// [`PreferenceRecord::merge`]). Persisted as flat JSON under the
/// `userPreferences` key, camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_type: Option<HomeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliances: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewables: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_pattern: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl PreferenceRecord {
    /// Merge `patch` into `self`: every field set in `patch` overwrites the
    /// corresponding field here; unset fields leave existing values untouched.
    pub fn merge(&mut self, patch: PreferenceRecord) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if patch.$field.is_some() {
                    self.$field = patch.$field;
                })*
            };
        }
        take!(
            first_name,
            last_name,
            home_type,
            appliances,
            renewables,
            usage_pattern,
            interests,
            address,
            city,
            province,
            postal_code,
            provider,
            meter_number,
            plan,
        );
    }

    /// Full display name, falling back to whichever half exists, then "User".
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => "User".to_string(),
        }
    }

    /// Whether a renewables tag is present (e.g. `"solar"`).
    pub fn has_renewable(&self, tag: &str) -> bool {
        self.renewables
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Whether an appliance tag is present (e.g. `"ev_charger"`).
    pub fn has_appliance(&self, tag: &str) -> bool {
        self.appliances
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_preserves_unrelated_fields() {
        let mut record = PreferenceRecord {
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };

        record.merge(PreferenceRecord {
            home_type: Some(HomeType::Condo),
            ..Default::default()
        });

        assert_eq!(record.first_name.as_deref(), Some("Ana"));
        assert_eq!(record.home_type, Some(HomeType::Condo));
    }

    #[test]
    fn merge_overwrites_set_fields() {
        let mut record = PreferenceRecord {
            city: Some("Milton".to_string()),
            ..Default::default()
        };

        record.merge(PreferenceRecord {
            city: Some("Burlington".to_string()),
            ..Default::default()
        });

        assert_eq!(record.city.as_deref(), Some("Burlington"));
    }

    #[test]
    fn merge_order_commutes_for_unrelated_keys() {
        let name_patch = PreferenceRecord {
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };
        let home_patch = PreferenceRecord {
            home_type: Some(HomeType::Condo),
            ..Default::default()
        };

        let mut a = PreferenceRecord::default();
        a.merge(name_patch.clone());
        a.merge(home_patch.clone());

        let mut b = PreferenceRecord::default();
        b.merge(home_patch);
        b.merge(name_patch);

        assert_eq!(a, b);
    }

    #[test]
    fn full_name_fallbacks() {
        let mut record = PreferenceRecord::default();
        assert_eq!(record.full_name(), "User");

        record.first_name = Some("Ana".to_string());
        assert_eq!(record.full_name(), "Ana");

        record.last_name = Some("Lee".to_string());
        assert_eq!(record.full_name(), "Ana Lee");

        record.first_name = None;
        assert_eq!(record.full_name(), "Lee");
    }

    #[test]
    fn serde_uses_camel_case_and_skips_absent() {
        let record = PreferenceRecord {
            first_name: Some("Ana".to_string()),
            postal_code: Some("L9T 0A1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["postalCode"], "L9T 0A1");
        assert!(json.get("lastName").is_none());
        assert!(json.get("homeType").is_none());
    }

    #[test]
    fn home_type_serde_roundtrip() {
        let json = serde_json::to_string(&HomeType::Townhouse).unwrap();
        assert_eq!(json, "\"townhouse\"");
        let parsed: HomeType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HomeType::Townhouse);
    }

    #[test]
    fn tag_lookups() {
        let record = PreferenceRecord {
            renewables: Some(vec!["solar".to_string()]),
            appliances: Some(vec!["washer".to_string(), "ev_charger".to_string()]),
            ..Default::default()
        };
        assert!(record.has_renewable("solar"));
        assert!(!record.has_renewable("home_battery"));
        assert!(record.has_appliance("ev_charger"));
        assert!(!record.has_appliance("dryer"));
    }
}
