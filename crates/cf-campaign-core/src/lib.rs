//! Campaign view controller.
//!
//! Host-independent: the browser crate supplies an [`Eip1193`] wallet and a
//! [`Page`] implementation, everything else lives here.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod page;
pub mod policy;
pub mod session;
pub mod validate;

#[cfg(test)]
mod testing;

pub use cf_chain_client::Eip1193;
pub use config::CampaignConfig;
pub use controller::Controller;
pub use error::CampaignError;
pub use page::Page;
pub use session::Session;
