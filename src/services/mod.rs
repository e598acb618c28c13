pub mod associations;
pub mod bom;
pub mod orders;
pub mod parts;
pub mod products;
