//! Smart-action suggestions, personalized from stored preferences.
//!
//! Content selection is a pure function of the preference record; rendering
//! and delivery live elsewhere. The "optimal" windows and savings figures are
//! fixed copy, not the output of a scheduler.

use serde::Serialize;

use crate::prefs::PreferenceRecord;

/// A suggested energy-saving action card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartAction {
    pub id: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub time_range: &'static str,
    pub savings_text: &'static str,
}

const BASE_ACTIONS: &[SmartAction] = &[
    SmartAction {
        id: "1",
        icon: "washer",
        description: "Run Washing Machine",
        time_range: "Today 2 AM - 5 AM",
        savings_text: "Save ~$0.75 CAD",
    },
    SmartAction {
        id: "2",
        icon: "fan",
        description: "Turn Off HVAC System",
        time_range: "Today 1 PM - 3 PM",
        savings_text: "Save ~$1.25 CAD",
    },
    SmartAction {
        id: "3",
        icon: "lightbulb",
        description: "Dim Living Room Lights",
        time_range: "Today 6 PM - 9 PM",
        savings_text: "Save ~$0.50 CAD",
    },
];

const SOLAR_ACTION: SmartAction = SmartAction {
    id: "4",
    icon: "energy",
    description: "Optimize Solar Generation",
    time_range: "Today 10 AM - 2 PM",
    savings_text: "Maximize output",
};

const BATTERY_ACTION: SmartAction = SmartAction {
    id: "5",
    icon: "battery",
    description: "Charge Home Battery",
    time_range: "Today 2 AM - 5 AM",
    savings_text: "Save ~$1.50 CAD",
};

const EV_ACTION: SmartAction = SmartAction {
    id: "6",
    icon: "car",
    description: "Charge Electric Vehicle",
    time_range: "Tonight 12 AM - 3 AM",
    savings_text: "Save ~$2.25 CAD",
};

/// Build the action list for a user: three base actions for everyone, plus
/// variants for solar panels, a home battery, and an EV charger.
pub fn smart_actions(prefs: Option<&PreferenceRecord>) -> Vec<SmartAction> {
    let mut actions: Vec<SmartAction> = BASE_ACTIONS.to_vec();

    if let Some(prefs) = prefs {
        if prefs.has_renewable("solar") {
            actions.push(SOLAR_ACTION);
        }
        if prefs.has_renewable("home_battery") {
            actions.push(BATTERY_ACTION);
        }
        if prefs.has_appliance("ev_charger") {
            actions.push(EV_ACTION);
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_user_gets_base_actions() {
        let actions = smart_actions(None);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].description, "Run Washing Machine");
    }

    #[test]
    fn solar_owner_gets_solar_action() {
        let prefs = PreferenceRecord {
            renewables: Some(vec!["solar".to_string()]),
            ..Default::default()
        };
        let actions = smart_actions(Some(&prefs));
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().any(|a| a.description == "Optimize Solar Generation"));
    }

    #[test]
    fn fully_equipped_user_gets_all_variants() {
        let prefs = PreferenceRecord {
            renewables: Some(vec!["solar".to_string(), "home_battery".to_string()]),
            appliances: Some(vec!["ev_charger".to_string()]),
            ..Default::default()
        };
        let actions = smart_actions(Some(&prefs));
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn unrelated_preferences_add_nothing() {
        let prefs = PreferenceRecord {
            renewables: Some(vec!["none".to_string()]),
            appliances: Some(vec!["washer".to_string()]),
            ..Default::default()
        };
        assert_eq!(smart_actions(Some(&prefs)).len(), 3);
    }
}
