//! CircularFlow: a server-rendered demo of an industrial resource exchange.
//!
//! Every page is rendered from fixed sample data in the visitor's language.
//! Language and theme live in cookies, the onboarding draft travels in the
//! wizard form, and page toggles are query parameters, so the server keeps
//! no state between requests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod server;
pub mod state;
pub mod toast;
pub mod views;
pub mod wizard;
