//! Listing lifecycle: the effective moderation status, enrichment
//! with related entities, presentation and moderation decisions.

mod decision;
mod enrich;
mod notice;
mod present;
mod status;

pub use self::{decision::*, enrich::*, notice::*, present::*, status::*};
