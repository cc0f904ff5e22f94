use nairavest_application::{InvestmentPackageService, LoginThrottleService, StateService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub login_throttle_service: LoginThrottleService,
    pub package_service: InvestmentPackageService,
    pub state_service: StateService,
    pub frontend_url: String,
}
