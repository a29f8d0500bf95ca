pub mod logging;

#[cfg(test)]
pub(crate) mod testing;
