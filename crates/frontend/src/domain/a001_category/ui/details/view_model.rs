use crate::domain::a001_category::ui::list::state::CategoryListState;
use crate::shared::number_format::format_price_input;
use contracts::domain::a001_category::{Category, CategoryField, FieldName};
use leptos::prelude::*;

/// Текст поля ввода для значения черновика
pub fn raw_value(category: &Category, name: FieldName) -> String {
    match name {
        FieldName::BottomThreshold => category.bottom_threshold.to_string(),
        FieldName::TopThreshold => category.top_threshold.to_string(),
        FieldName::PortionSize => category.portion_size.to_string(),
        FieldName::Company => category.company.display_name().to_string(),
        FieldName::SalesPrice => format_price_input(category.sales_price),
    }
}

/// ViewModel for Category edit form
///
/// Хранит текст полей ввода отдельно от черновика: пока введённое значение
/// не разбирается (например, "12." в цене), черновик сохраняет прежнее.
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub state: RwSignal<CategoryListState>,
    pub bottom_threshold: RwSignal<String>,
    pub top_threshold: RwSignal<String>,
    pub portion_size: RwSignal<String>,
    pub company: RwSignal<String>,
    pub sales_price: RwSignal<String>,
}

impl CategoryDetailsViewModel {
    pub fn new(state: RwSignal<CategoryListState>) -> Self {
        let initial = |name: FieldName| {
            let value = state.with_untracked(|s| {
                s.editing()
                    .map(|draft| raw_value(draft, name))
                    .unwrap_or_default()
            });
            RwSignal::new(value)
        };

        Self {
            state,
            bottom_threshold: initial(FieldName::BottomThreshold),
            top_threshold: initial(FieldName::TopThreshold),
            portion_size: initial(FieldName::PortionSize),
            company: initial(FieldName::Company),
            sales_price: initial(FieldName::SalesPrice),
        }
    }

    pub fn input(&self, name: FieldName) -> RwSignal<String> {
        match name {
            FieldName::BottomThreshold => self.bottom_threshold,
            FieldName::TopThreshold => self.top_threshold,
            FieldName::PortionSize => self.portion_size,
            FieldName::Company => self.company,
            FieldName::SalesPrice => self.sales_price,
        }
    }

    /// Ввод в поле формы: текст сохраняется всегда, черновик меняется, только если значение разобрано
    pub fn change_command(&self, name: FieldName, raw: String) {
        let parsed = CategoryField::parse(name, &raw);
        self.input(name).set(raw);

        match parsed {
            Ok(field) => self.state.update(|s| s.change_field(field)),
            Err(e) => log::warn!("{}", e),
        }
    }
}
