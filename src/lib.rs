//! Paisesrv - country data gateway with per-country votes
//!
//! This library provides the core functionality for paisesrv, which relays
//! a public country information provider and keeps up/down vote counters
//! for each country in a SQLite store.

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use services::{country::CountryService, database::DatabaseService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_service: Arc<DatabaseService>,
    pub country_service: Arc<CountryService>,
}
