use serde::{Deserialize, Serialize};

use super::field::CategoryField;
use crate::domain::common::AggregateRoot;
use crate::enums::Company;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории
///
/// Уникален в пределах текущего списка. Выдаётся счётчиком списка,
/// после удаления номер повторно не используется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Следующий ID в последовательности
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    /// Задаётся только при создании, в форме не редактируется
    pub name: String,

    // Пороги дозаказа; порядок между ними не проверяется
    pub bottom_threshold: i32,
    pub top_threshold: i32,

    pub portion_size: u8,
    pub company: Company,

    /// Цена продажи, 2 знака после запятой при генерации
    pub sales_price: f64,
}

impl Category {
    /// Подпись категории по позиции в списке: "Category -3" для позиции 0
    pub fn label_for_position(position: usize) -> String {
        format!("Category {}", position as i64 - super::seed::LABEL_OFFSET)
    }

    /// Применить изменение одного поля
    pub fn apply(&mut self, field: CategoryField) {
        match field {
            CategoryField::BottomThreshold(v) => self.bottom_threshold = v,
            CategoryField::TopThreshold(v) => self.top_threshold = v,
            CategoryField::PortionSize(v) => self.portion_size = v,
            CategoryField::Company(v) => self.company = v,
            CategoryField::SalesPrice(v) => self.sales_price = v,
        }
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Category"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        Category {
            id: CategoryId::new(4),
            name: Category::label_for_position(4),
            bottom_threshold: 250,
            top_threshold: 900,
            portion_size: 2,
            company: Company::Godlevert,
            sales_price: 42.5,
        }
    }

    #[test]
    fn test_label_for_position() {
        assert_eq!(Category::label_for_position(0), "Category -3");
        assert_eq!(Category::label_for_position(3), "Category 0");
        assert_eq!(Category::label_for_position(10), "Category 7");
    }

    #[test]
    fn test_apply_touches_only_one_field() {
        let mut category = sample();
        category.apply(CategoryField::TopThreshold(120));

        let mut expected = sample();
        expected.top_threshold = 120;
        assert_eq!(category, expected);
    }

    #[test]
    fn test_apply_does_not_enforce_ranges() {
        let mut category = sample();
        category.apply(CategoryField::BottomThreshold(5000));
        category.apply(CategoryField::TopThreshold(-1));
        category.apply(CategoryField::PortionSize(0));
        category.apply(CategoryField::SalesPrice(-3.0));

        assert_eq!(category.bottom_threshold, 5000);
        assert_eq!(category.top_threshold, -1);
        assert_eq!(category.portion_size, 0);
        assert_eq!(category.sales_price, -3.0);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 4,
                "name": "Category 1",
                "bottomThreshold": 250,
                "topThreshold": 900,
                "portionSize": 2,
                "company": "Godlevert",
                "salesPrice": 42.5
            })
        );
    }

    #[test]
    fn test_category_id_next_and_display() {
        assert_eq!(CategoryId::new(3).next(), CategoryId::new(4));
        assert_eq!(CategoryId::new(12).to_string(), "12");
        assert_eq!(sample().id(), CategoryId::new(4));
    }
}
