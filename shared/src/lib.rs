//! Wire-level types shared between the integrations frontend and the
//! backend service that implements the `load` endpoints.

pub mod api;
pub mod models;

pub use models::{Credentials, IntegrationItem, IntegrationType, UnknownIntegration};
