//! Infrastructure layer - services, storage gateways, and process concerns

pub mod logging;
pub mod package;
