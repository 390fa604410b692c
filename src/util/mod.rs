pub mod paths;
pub mod split;
