//! Analytics screen data — static usage series and breakdowns.

use serde::Serialize;

/// Time range selector on the analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

/// One usage sample: kWh, cost in CAD, carbon in grams.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsagePoint {
    pub label: &'static str,
    pub energy: f64,
    pub cost: f64,
    pub carbon: f64,
}

const DAILY_USAGE: &[UsagePoint] = &[
    UsagePoint { label: "12 AM", energy: 1.2, cost: 0.07, carbon: 90.0 },
    UsagePoint { label: "3 AM", energy: 0.8, cost: 0.05, carbon: 60.0 },
    UsagePoint { label: "6 AM", energy: 1.5, cost: 0.09, carbon: 110.0 },
    UsagePoint { label: "9 AM", energy: 2.3, cost: 0.14, carbon: 170.0 },
    UsagePoint { label: "12 PM", energy: 3.1, cost: 0.18, carbon: 230.0 },
    UsagePoint { label: "3 PM", energy: 2.8, cost: 0.17, carbon: 210.0 },
    UsagePoint { label: "6 PM", energy: 3.5, cost: 0.21, carbon: 260.0 },
    UsagePoint { label: "9 PM", energy: 2.1, cost: 0.13, carbon: 160.0 },
];

const WEEKLY_USAGE: &[UsagePoint] = &[
    UsagePoint { label: "Mon", energy: 12.0, cost: 0.72, carbon: 900.0 },
    UsagePoint { label: "Tue", energy: 15.0, cost: 0.90, carbon: 1100.0 },
    UsagePoint { label: "Wed", energy: 13.0, cost: 0.78, carbon: 970.0 },
    UsagePoint { label: "Thu", energy: 17.0, cost: 1.02, carbon: 1250.0 },
    UsagePoint { label: "Fri", energy: 14.0, cost: 0.84, carbon: 1050.0 },
    UsagePoint { label: "Sat", energy: 11.0, cost: 0.66, carbon: 820.0 },
    UsagePoint { label: "Sun", energy: 10.0, cost: 0.60, carbon: 750.0 },
];

const MONTHLY_USAGE: &[UsagePoint] = &[
    UsagePoint { label: "Jan", energy: 320.0, cost: 19.20, carbon: 23800.0 },
    UsagePoint { label: "Feb", energy: 290.0, cost: 17.40, carbon: 21500.0 },
    UsagePoint { label: "Mar", energy: 310.0, cost: 18.60, carbon: 23000.0 },
    UsagePoint { label: "Apr", energy: 340.0, cost: 20.40, carbon: 25200.0 },
    UsagePoint { label: "May", energy: 380.0, cost: 22.80, carbon: 28100.0 },
    UsagePoint { label: "Jun", energy: 420.0, cost: 25.20, carbon: 31100.0 },
    UsagePoint { label: "Jul", energy: 450.0, cost: 27.00, carbon: 33300.0 },
    UsagePoint { label: "Aug", energy: 430.0, cost: 25.80, carbon: 31900.0 },
    UsagePoint { label: "Sep", energy: 370.0, cost: 22.20, carbon: 27400.0 },
    UsagePoint { label: "Oct", energy: 350.0, cost: 21.00, carbon: 25900.0 },
    UsagePoint { label: "Nov", energy: 330.0, cost: 19.80, carbon: 24400.0 },
    UsagePoint { label: "Dec", energy: 360.0, cost: 21.60, carbon: 26700.0 },
];

/// Usage series for a time range.
pub fn usage(range: TimeRange) -> &'static [UsagePoint] {
    match range {
        TimeRange::Day => DAILY_USAGE,
        TimeRange::Week => WEEKLY_USAGE,
        TimeRange::Month => MONTHLY_USAGE,
    }
}

/// Aggregated totals over a usage series.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotals {
    pub energy: f64,
    pub cost: f64,
    pub carbon: f64,
}

pub fn totals(range: TimeRange) -> UsageTotals {
    let points = usage(range);
    UsageTotals {
        energy: points.iter().map(|p| p.energy).sum(),
        cost: points.iter().map(|p| p.cost).sum(),
        carbon: points.iter().map(|p| p.carbon).sum(),
    }
}

/// A named share of a breakdown pie, in percent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Share {
    pub name: &'static str,
    pub value: u32,
}

const SOURCE_BREAKDOWN: &[Share] = &[
    Share { name: "Grid", value: 65 },
    Share { name: "Solar", value: 25 },
    Share { name: "Battery", value: 10 },
];

const DEVICE_BREAKDOWN: &[Share] = &[
    Share { name: "HVAC", value: 45 },
    Share { name: "Appliances", value: 25 },
    Share { name: "Lighting", value: 15 },
    Share { name: "EV Charging", value: 10 },
    Share { name: "Other", value: 5 },
];

/// Where the energy came from.
pub fn source_breakdown() -> &'static [Share] {
    SOURCE_BREAKDOWN
}

/// What consumed it.
pub fn device_breakdown() -> &'static [Share] {
    DEVICE_BREAKDOWN
}
