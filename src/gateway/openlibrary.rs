pub mod lookup;

#[cfg(test)]
pub(crate) mod stub;
