//! Event listings: the browse filter set and the fetch state shared by the
//! dashboard and browse screens.

pub mod filters;
pub mod list;
