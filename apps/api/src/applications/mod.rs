// Job application tracker. Every query is scoped to the authenticated owner.

pub mod handlers;
pub mod store;
