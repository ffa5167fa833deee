// Typed entity snapshots handed to the shaping layer by the data-access
// layer. Snapshots are immutable for the duration of one shaping call and
// carry explicit loaded/not-loaded state for navigable relations.

pub mod ad;
pub mod city;
pub mod document;
pub mod order;
pub mod product;
pub mod relation;
pub mod role;
pub mod sourcing;

pub use ad::Ad;
pub use city::{Area, City};
pub use document::Document;
pub use order::{OrderItem, OrderItemVariant};
pub use product::{Category, Product, ProductSummary, ProductVariant};
pub use relation::Relation;
pub use role::Role;
pub use sourcing::{Sourcing, SourcingVariant};
