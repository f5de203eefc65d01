//! Static site content.

pub mod blog;
pub mod projects;
pub mod services;
pub mod skills;
pub mod team;
