//! Business rules for each resource, between the controllers and the repositories.

pub mod bot;
pub mod message;

#[cfg(test)]
mod test;
