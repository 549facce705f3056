//! Page components.

mod account_settings;
mod dashboard;

pub use account_settings::AccountSettings;
pub use dashboard::Dashboard;
