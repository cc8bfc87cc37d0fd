//! Energy outlook — the fixed 24h price/carbon/renewables series and the
//! level classification shown on the home screen.

use serde::Serialize;

/// Cost/carbon banding for the status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Pricing period of a two-hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePeriod {
    Optimal,
    Mid,
    Peak,
}

/// One point of the outlook timeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutlookPoint {
    pub time: &'static str,
    /// $/kWh.
    pub price: f64,
    /// g CO2/kWh.
    pub carbon: u32,
    /// Renewable share, percent.
    pub renewables: u32,
    pub period: PricePeriod,
}

const OUTLOOK: &[OutlookPoint] = &[
    OutlookPoint { time: "12 AM", price: 0.062, carbon: 120, renewables: 45, period: PricePeriod::Optimal },
    OutlookPoint { time: "2 AM", price: 0.058, carbon: 115, renewables: 47, period: PricePeriod::Optimal },
    OutlookPoint { time: "4 AM", price: 0.061, carbon: 118, renewables: 46, period: PricePeriod::Optimal },
    OutlookPoint { time: "6 AM", price: 0.075, carbon: 130, renewables: 42, period: PricePeriod::Mid },
    OutlookPoint { time: "8 AM", price: 0.092, carbon: 145, renewables: 38, period: PricePeriod::Mid },
    OutlookPoint { time: "10 AM", price: 0.108, carbon: 155, renewables: 40, period: PricePeriod::Peak },
    OutlookPoint { time: "12 PM", price: 0.115, carbon: 160, renewables: 39, period: PricePeriod::Peak },
    OutlookPoint { time: "2 PM", price: 0.104, carbon: 150, renewables: 43, period: PricePeriod::Peak },
    OutlookPoint { time: "4 PM", price: 0.110, carbon: 158, renewables: 41, period: PricePeriod::Peak },
    OutlookPoint { time: "6 PM", price: 0.098, carbon: 148, renewables: 40, period: PricePeriod::Mid },
    OutlookPoint { time: "8 PM", price: 0.082, carbon: 135, renewables: 42, period: PricePeriod::Mid },
    OutlookPoint { time: "10 PM", price: 0.070, carbon: 125, renewables: 44, period: PricePeriod::Mid },
];

/// The fixed outlook timeline.
pub fn outlook() -> &'static [OutlookPoint] {
    OUTLOOK
}

/// Current grid status derived from the outlook slot for the given hour.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub cost_level: Level,
    pub cost_text: &'static str,
    pub carbon_level: Level,
    pub carbon_text: &'static str,
    pub renewable_percent: u32,
}

/// Classify the slot covering `hour` (0-23) into status indicators.
pub fn current_status(hour: u32) -> CurrentStatus {
    let slot = (hour as usize / 2).min(OUTLOOK.len() - 1);
    let point = &OUTLOOK[slot];

    let cost_level = if point.price < 0.07 {
        Level::Low
    } else if point.price < 0.09 {
        Level::Medium
    } else {
        Level::High
    };
    let cost_text = match cost_level {
        Level::Low => "$0.06/kWh",
        Level::Medium => "$0.08/kWh",
        Level::High => "$0.11/kWh",
    };

    let carbon_level = if point.carbon < 125 {
        Level::Low
    } else if point.carbon < 145 {
        Level::Medium
    } else {
        Level::High
    };
    let carbon_text = match carbon_level {
        Level::Low => "120 g/kWh",
        Level::Medium => "140 g/kWh",
        Level::High => "155 g/kWh",
    };

    CurrentStatus {
        cost_level,
        cost_text,
        carbon_level,
        carbon_text,
        renewable_percent: point.renewables,
    }
}

/// The next cheapest window — fixed copy, not a scheduler result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWindow {
    pub time_range: &'static str,
    pub cost_saving: &'static str,
}

pub fn next_optimal_window() -> OptimalWindow {
    OptimalWindow {
        time_range: "2 AM - 5 AM",
        cost_saving: "~$0.82 CAD/kWh",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlook_covers_full_day_in_two_hour_slots() {
        assert_eq!(outlook().len(), 12);
        assert_eq!(outlook()[0].time, "12 AM");
        assert_eq!(outlook()[11].time, "10 PM");
    }

    #[test]
    fn overnight_hours_classify_low() {
        let status = current_status(2);
        assert_eq!(status.cost_level, Level::Low);
        assert_eq!(status.carbon_level, Level::Low);
        assert_eq!(status.renewable_percent, 47);
    }

    #[test]
    fn midday_hours_classify_high() {
        let status = current_status(12);
        assert_eq!(status.cost_level, Level::High);
        assert_eq!(status.carbon_level, Level::High);
    }

    #[test]
    fn morning_shoulder_is_medium() {
        let status = current_status(8);
        assert_eq!(status.cost_level, Level::High);
        assert_eq!(status.carbon_level, Level::High);

        let status = current_status(6);
        assert_eq!(status.cost_level, Level::Medium);
        assert_eq!(status.carbon_level, Level::Medium);
    }

    #[test]
    fn hour_23_maps_to_last_slot() {
        let status = current_status(23);
        assert_eq!(status.renewable_percent, 44);
    }
}
