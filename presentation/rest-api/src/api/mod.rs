pub mod cart;
pub mod catalog;
pub mod error;
pub mod health;
pub mod order;
pub mod tags;
