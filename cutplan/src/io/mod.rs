pub mod export;
pub mod ext_repr;
pub mod import;
