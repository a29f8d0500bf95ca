pub mod domain;
pub mod factory;
pub mod repository;

#[cfg(test)]
pub(crate) mod fixtures;
