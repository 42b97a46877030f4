//! LF Content module layout
//!
//! Core configuration and tooling
pub mod config;
pub mod cli;
pub mod error;
pub mod auth;

// Database modules
pub mod database {
    pub mod connection;
    pub mod content;
    pub mod relations;
    pub mod comments;
}

// Like/bookmark engagement
pub mod engagement {
    pub mod toggle;
    pub mod status;
}

// Web modules
pub mod web {
    pub mod state;
    pub mod routes;
}
