use std::fmt::Display;

/// Трейт для корня агрегата
///
/// Данные записи плюс имя класса агрегата для UI и логов.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: Copy + Eq + Display;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;
}
