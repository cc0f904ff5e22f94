//! Domain types and validation rules for Nairavest.

#![forbid(unsafe_code)]

mod package;
mod state;
mod user;

pub use package::InvestmentPackage;
pub use state::{NIGERIAN_STATES, State};
pub use user::{PhoneNumber, UserId};
