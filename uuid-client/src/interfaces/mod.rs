pub(crate) mod entropy;
pub(crate) mod seed;
