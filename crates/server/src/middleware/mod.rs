//! HTTP middleware for the Crewdesk server.

pub mod auth;
