//! Форматирование чисел для таблиц

/// Цена в долларах с 2 знаками после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(12.5), "$12.50");
/// ```
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

/// Значение для поля ввода цены: без лишних нулей, как вводил пользователь
pub fn format_price_input(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(109.99), "$109.99");
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(-3.0), "-$3.00");
    }

    #[test]
    fn test_format_price_input() {
        assert_eq!(format_price_input(12.5), "12.5");
        assert_eq!(format_price_input(10.0), "10");
        assert_eq!(format_price_input(42.07), "42.07");
    }
}
