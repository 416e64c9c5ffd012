//! Общие типы страницы управления категориями.
//!
//! Крейт не зависит от UI: здесь только агрегат, перечисления
//! и генератор стартовых данных.

pub mod domain;
pub mod enums;
