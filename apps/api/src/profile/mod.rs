// Static profile data: models, startup loader, context builder, career trajectory.

pub mod career;
pub mod context_builder;
pub mod handlers;
pub mod loader;
pub mod models;

#[cfg(test)]
pub mod fixtures;
