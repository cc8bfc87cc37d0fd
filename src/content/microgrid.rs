//! Community microgrid directory — static listings plus join-request state.

use tokio::sync::RwLock;

use serde::Serialize;

/// A community microgrid listing.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Microgrid {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    pub members: u32,
    /// Total capacity in kWh.
    pub capacity: u32,
    pub available_capacity: u32,
    /// $/kWh within the grid.
    pub energy_price: f64,
    pub status: &'static str,
    pub last_activity: &'static str,
    /// Renewable share, percent.
    pub renewable: u32,
    pub carbon_intensity: &'static str,
}

/// A grid the user already belongs to.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// kWh contributed this month.
    pub contribution: f64,
    /// CAD earned this month.
    pub earnings: f64,
    pub status: &'static str,
}

const NEARBY_GRIDS: &[Microgrid] = &[
    Microgrid {
        id: "grid-1",
        name: "Milton Community Grid",
        location: "Milton, Ontario",
        distance: "0.8 km",
        members: 34,
        capacity: 125,
        available_capacity: 45,
        energy_price: 0.058,
        status: "active",
        last_activity: "2 mins ago",
        renewable: 80,
        carbon_intensity: "Very Low",
    },
    Microgrid {
        id: "grid-2",
        name: "Halton Green Energy",
        location: "Milton, Ontario",
        distance: "1.2 km",
        members: 22,
        capacity: 85,
        available_capacity: 20,
        energy_price: 0.062,
        status: "active",
        last_activity: "5 mins ago",
        renewable: 70,
        carbon_intensity: "Low",
    },
    Microgrid {
        id: "grid-3",
        name: "Ontario Solar Collective",
        location: "Mississauga, Ontario",
        distance: "3.5 km",
        members: 56,
        capacity: 230,
        available_capacity: 85,
        energy_price: 0.055,
        status: "active",
        last_activity: "Just now",
        renewable: 95,
        carbon_intensity: "Minimal",
    },
    Microgrid {
        id: "grid-4",
        name: "Burlington Power Share",
        location: "Burlington, Ontario",
        distance: "5.2 km",
        members: 18,
        capacity: 65,
        available_capacity: 15,
        energy_price: 0.065,
        status: "active",
        last_activity: "12 mins ago",
        renewable: 60,
        carbon_intensity: "Medium",
    },
];

const MEMBERSHIPS: &[Membership] = &[Membership {
    id: "grid-1",
    name: "Milton Community Grid",
    location: "Milton, Ontario",
    contribution: 5.2,
    earnings: 12.85,
    status: "connected",
}];

/// Nearby grid listings.
pub fn nearby() -> &'static [Microgrid] {
    NEARBY_GRIDS
}

/// The user's current memberships.
pub fn memberships() -> &'static [Membership] {
    MEMBERSHIPS
}

/// Whether the user already belongs to `grid_id`.
pub fn is_member(grid_id: &str) -> bool {
    MEMBERSHIPS.iter().any(|m| m.id == grid_id)
}

/// Join-request tracker. Requests are per-session state (lost on restart),
/// like the listings there is no real grid backend behind them.
#[derive(Default)]
pub struct JoinRequests {
    sent: RwLock<Vec<String>>,
}

impl JoinRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a join request. Returns false if the grid is unknown, already
    /// joined, or already requested.
    pub async fn request(&self, grid_id: &str) -> bool {
        if !NEARBY_GRIDS.iter().any(|g| g.id == grid_id) || is_member(grid_id) {
            return false;
        }
        let mut sent = self.sent.write().await;
        if sent.iter().any(|id| id == grid_id) {
            return false;
        }
        sent.push(grid_id.to_string());
        true
    }

    pub async fn has_requested(&self, grid_id: &str) -> bool {
        self.sent.read().await.iter().any(|id| id == grid_id)
    }
}
