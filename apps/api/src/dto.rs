use nairavest_core::UserIdentity;
use nairavest_domain::{InvestmentPackage, State};
use serde::{Deserialize, Serialize};

/// Incoming payload for phone/password login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

/// Auth status response for the login flow.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
}

/// Signed-in identity payload.
#[derive(Debug, Serialize)]
pub struct UserIdentityResponse {
    pub subject: String,
    pub phone: String,
    pub display_name: Option<String>,
}

impl From<UserIdentity> for UserIdentityResponse {
    fn from(identity: UserIdentity) -> Self {
        Self {
            subject: identity.subject().to_owned(),
            phone: identity.phone().to_owned(),
            display_name: identity.display_name().map(ToOwned::to_owned),
        }
    }
}

/// Investment package payload.
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: i64,
    pub name: String,
    pub min_amount: i64,
    pub max_amount: i64,
    pub duration_days: i32,
    pub roi_percent: f64,
}

impl From<InvestmentPackage> for PackageResponse {
    fn from(package: InvestmentPackage) -> Self {
        Self {
            id: package.id,
            name: package.name,
            min_amount: package.min_amount,
            max_amount: package.max_amount,
            duration_days: package.duration_days,
            roi_percent: package.roi_percent,
        }
    }
}

/// Seeded state payload.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub code: String,
    pub name: String,
}

impl From<State> for StateResponse {
    fn from(state: State) -> Self {
        Self {
            code: state.code,
            name: state.name,
        }
    }
}
