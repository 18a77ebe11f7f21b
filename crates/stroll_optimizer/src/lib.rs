pub mod catalog;
pub mod suggest;
pub mod tour;

#[cfg(test)]
pub(crate) mod test_utils;
