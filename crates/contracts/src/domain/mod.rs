pub mod contact;
pub mod product;
