//! Изменения отдельных полей категории из формы редактирования.

use thiserror::Error;

use crate::enums::Company;

/// Редактируемое поле категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    BottomThreshold,
    TopThreshold,
    PortionSize,
    Company,
    SalesPrice,
}

impl FieldName {
    /// Подпись поля в форме
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::BottomThreshold => "Bottom Threshold",
            FieldName::TopThreshold => "Top Threshold",
            FieldName::PortionSize => "Portion Size",
            FieldName::Company => "Company",
            FieldName::SalesPrice => "Sales Price",
        }
    }

    /// Все редактируемые поля в порядке формы
    pub fn all() -> [FieldName; 5] {
        [
            FieldName::BottomThreshold,
            FieldName::TopThreshold,
            FieldName::PortionSize,
            FieldName::Company,
            FieldName::SalesPrice,
        ]
    }
}

/// Новое значение одного поля категории
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryField {
    BottomThreshold(i32),
    TopThreshold(i32),
    PortionSize(u8),
    Company(Company),
    SalesPrice(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CategoryFieldError {
    #[error("{field}: expected a whole number, got {raw:?}")]
    NotAnInteger { field: &'static str, raw: String },

    #[error("{field}: expected a number, got {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("unknown company {0:?}")]
    UnknownCompany(String),
}

impl CategoryField {
    /// Разобрать сырое значение из поля ввода
    ///
    /// Диапазоны не проверяются: отрицательный порог или цена допустимы.
    pub fn parse(name: FieldName, raw: &str) -> Result<Self, CategoryFieldError> {
        let value = raw.trim();
        let not_an_integer = || CategoryFieldError::NotAnInteger {
            field: name.label(),
            raw: raw.to_string(),
        };

        match name {
            FieldName::BottomThreshold => value
                .parse()
                .map(CategoryField::BottomThreshold)
                .map_err(|_| not_an_integer()),
            FieldName::TopThreshold => value
                .parse()
                .map(CategoryField::TopThreshold)
                .map_err(|_| not_an_integer()),
            FieldName::PortionSize => value
                .parse()
                .map(CategoryField::PortionSize)
                .map_err(|_| not_an_integer()),
            FieldName::Company => Company::from_display_name(value)
                .map(CategoryField::Company)
                .ok_or_else(|| CategoryFieldError::UnknownCompany(raw.to_string())),
            FieldName::SalesPrice => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(CategoryField::SalesPrice)
                .ok_or_else(|| CategoryFieldError::NotANumber {
                    field: name.label(),
                    raw: raw.to_string(),
                }),
        }
    }

    /// Какое поле меняет это изменение
    pub fn name(&self) -> FieldName {
        match self {
            CategoryField::BottomThreshold(_) => FieldName::BottomThreshold,
            CategoryField::TopThreshold(_) => FieldName::TopThreshold,
            CategoryField::PortionSize(_) => FieldName::PortionSize,
            CategoryField::Company(_) => FieldName::Company,
            CategoryField::SalesPrice(_) => FieldName::SalesPrice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thresholds() {
        assert_eq!(
            CategoryField::parse(FieldName::BottomThreshold, " 250 "),
            Ok(CategoryField::BottomThreshold(250))
        );
        assert_eq!(
            CategoryField::parse(FieldName::TopThreshold, "-40"),
            Ok(CategoryField::TopThreshold(-40))
        );
        assert_eq!(
            CategoryField::parse(FieldName::TopThreshold, "12a"),
            Err(CategoryFieldError::NotAnInteger {
                field: "Top Threshold",
                raw: "12a".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_portion_size_from_select_value() {
        assert_eq!(
            CategoryField::parse(FieldName::PortionSize, "6"),
            Ok(CategoryField::PortionSize(6))
        );
        assert!(CategoryField::parse(FieldName::PortionSize, "").is_err());
    }

    #[test]
    fn test_parse_company() {
        assert_eq!(
            CategoryField::parse(FieldName::Company, "Godlevert"),
            Ok(CategoryField::Company(Company::Godlevert))
        );
        assert_eq!(
            CategoryField::parse(FieldName::Company, "Acme"),
            Err(CategoryFieldError::UnknownCompany("Acme".to_string()))
        );
    }

    #[test]
    fn test_parse_sales_price() {
        assert_eq!(
            CategoryField::parse(FieldName::SalesPrice, "19.99"),
            Ok(CategoryField::SalesPrice(19.99))
        );
        assert!(CategoryField::parse(FieldName::SalesPrice, "abc").is_err());
        assert!(CategoryField::parse(FieldName::SalesPrice, "NaN").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = CategoryField::parse(FieldName::BottomThreshold, "ten").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bottom Threshold: expected a whole number, got \"ten\""
        );
    }

    #[test]
    fn test_name_matches_parsed_field() {
        for name in FieldName::all() {
            let raw = match name {
                FieldName::Company => "Linas",
                _ => "3",
            };
            let field = CategoryField::parse(name, raw).unwrap();
            assert_eq!(field.name(), name);
        }
    }
}
