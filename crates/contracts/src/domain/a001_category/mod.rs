//! Category Domain Module
//!
//! Категория товара: пороги дозаказа, размер порции, поставщик и цена продажи.

pub mod aggregate;
pub mod field;
pub mod seed;

pub use aggregate::{Category, CategoryId};
pub use field::{CategoryField, CategoryFieldError, FieldName};
pub use seed::{generate_category, generate_seed, generate_seed_sized, SEED_SIZE};
