//! Personal portfolio site with an admin panel.
//!
//! All site content (profile, skills, projects and the admin login) lives in
//! a single JSON file. The admin panel edits it by loading the whole
//! document, changing it in memory and writing it back.

pub mod config;
pub mod db;
pub mod models;
pub mod server;
