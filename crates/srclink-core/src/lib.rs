pub mod config;
pub mod logging;

pub mod answer;
pub mod links;
pub mod present;
pub mod query;
pub mod response;
pub mod session;
