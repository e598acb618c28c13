pub mod order;
pub mod part;
pub mod product;
pub mod product_part_association;

pub use order::Entity as Order;
pub use part::Entity as Part;
pub use product::Entity as Product;
pub use product_part_association::Entity as ProductPartAssociation;
