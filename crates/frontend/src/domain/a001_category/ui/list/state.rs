//! Состояние страницы категорий: список записей и черновик редактирования.
//!
//! Каждая изменяющая операция возвращает `CategoryNotice`, который
//! показывает слой уведомлений (`shared::toast`). Сама структура о UI не знает.

use contracts::domain::a001_category::{
    generate_category, generate_seed_sized, Category, CategoryField, CategoryId,
};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use rand::Rng;

/// Оттенок уведомления
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    /// Используется как визуальный сигнал удаления, а не как ошибка
    Error,
}

/// Уведомление, порождённое операцией над списком
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNotice {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: NoticeSeverity,
}

impl CategoryNotice {
    pub fn added() -> Self {
        Self {
            title: "Category added",
            description: "You have added a new category.",
            severity: NoticeSeverity::Success,
        }
    }

    pub fn updated() -> Self {
        Self {
            title: "Category updated",
            description: "You have updated the category.",
            severity: NoticeSeverity::Success,
        }
    }

    pub fn deleted() -> Self {
        Self {
            title: "Category deleted",
            description: "You have deleted the category.",
            severity: NoticeSeverity::Error,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CategoryListState {
    items: Vec<Category>,
    /// Черновик редактирования; только один одновременно
    editing: Option<Category>,
    /// Следующий свободный ID, не зависит от длины списка
    next_id: CategoryId,
    /// Номер сеанса редактирования, растёт при каждом begin_edit
    edit_session: u64,
}

impl CategoryListState {
    pub fn new(items: Vec<Category>) -> Self {
        let next_id = items
            .iter()
            .map(|c| c.id())
            .max()
            .map(|id| id.next())
            .unwrap_or(CategoryId::new(0));

        Self {
            items,
            editing: None,
            next_id,
            edit_session: 0,
        }
    }

    /// Случайный стартовый набор заданного размера
    pub fn seeded<R: Rng>(rng: &mut R, size: usize) -> Self {
        Self::new(generate_seed_sized(rng, size))
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn editing(&self) -> Option<&Category> {
        self.editing.as_ref()
    }

    /// Ключ формы редактирования: меняется при каждом begin_edit,
    /// даже если повторно открыта та же запись
    pub fn edit_key(&self) -> Option<(CategoryId, u64)> {
        self.editing.as_ref().map(|c| (c.id(), self.edit_session))
    }

    /// Добавить случайную категорию в конец списка
    pub fn add_new<R: Rng>(&mut self, rng: &mut R) -> CategoryNotice {
        let id = self.next_id;
        self.next_id = id.next();

        let category = generate_category(rng, id, self.items.len());
        log::info!("{} added: id={} name={}", Category::element_name(), id, category.name);
        self.items.push(category);

        CategoryNotice::added()
    }

    /// Начать редактирование; несохранённый предыдущий черновик отбрасывается
    pub fn begin_edit(&mut self, id: CategoryId) {
        match self.items.iter().find(|c| c.id() == id) {
            Some(category) => {
                if let Some(previous) = &self.editing {
                    if previous.id() != id {
                        log::debug!("discarding unsaved edit of id={}", previous.id());
                    }
                }
                log::debug!("editing {} (id={})", category.description(), id);
                self.editing = Some(category.clone());
                self.edit_session += 1;
            }
            None => log::debug!("begin_edit: id={} not in list", id),
        }
    }

    /// Изменить одно поле черновика. Без черновика ничего не делает
    pub fn change_field(&mut self, field: CategoryField) {
        match self.editing.as_mut() {
            Some(draft) => draft.apply(field),
            None => log::debug!("change_field {:?} without an edit in progress", field.name()),
        }
    }

    /// Записать черновик в список
    pub fn save(&mut self) -> Option<CategoryNotice> {
        let draft = self.editing.take()?;

        // Запись могла быть удалена во время редактирования: тогда заменять нечего
        match self.items.iter_mut().find(|c| c.id() == draft.id()) {
            Some(slot) => *slot = draft,
            None => log::debug!("save: id={} no longer in list", draft.id()),
        }

        Some(CategoryNotice::updated())
    }

    /// Удалить запись; уведомление отдаётся всегда
    pub fn delete(&mut self, id: CategoryId) -> CategoryNotice {
        let before = self.items.len();
        self.items.retain(|c| c.id() != id);
        if self.items.len() < before {
            log::info!("{} deleted: id={}", Category::element_name(), id);
        }

        CategoryNotice::deleted()
    }
}

/// Состояние страницы со свежим случайным набором
pub fn create_state(seed_size: usize) -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::seeded(&mut rand::thread_rng(), seed_size))
}
