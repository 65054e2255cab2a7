//! Section builders, one per page section plus the footer.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod timeline;
