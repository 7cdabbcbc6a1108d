pub mod admissions;

pub mod auth;

pub mod catalog;

pub mod scenarios;

pub mod users;

pub use admissions::{configure_admission_routes, configure_trainer_feed_routes};
pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use scenarios::configure_scenario_routes;
pub use users::configure_user_routes;
