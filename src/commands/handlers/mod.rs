//! Command handler implementations

pub mod correct;
pub mod search;
pub mod suggest;
