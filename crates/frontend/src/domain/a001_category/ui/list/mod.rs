pub mod state;

use self::state::{create_state, CategoryListState};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use crate::shared::toast::NoticeService;
use contracts::domain::a001_category::{Category, CategoryId};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub bottom_threshold: String,
    pub top_threshold: String,
    pub portion_size: String,
    pub company: String,
    pub sales_price: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            bottom_threshold: c.bottom_threshold.to_string(),
            top_threshold: c.top_threshold.to_string(),
            portion_size: c.portion_size.to_string(),
            company: c.company.display_name().to_string(),
            sales_price: format_price(c.sales_price),
        }
    }
}

fn rows(state: &CategoryListState) -> Vec<CategoryRow> {
    state.items().iter().map(CategoryRow::from).collect()
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let state = create_state(config.seed.size);
    let notices = NoticeService::from_context();

    // Форма пересоздаётся при каждом begin_edit, в том числе для той же записи
    let edit_key = Memo::new(move |_| state.with(|s| s.edit_key()));

    let handle_add_new = {
        let notices = notices.clone();
        move |_| {
            if let Some(notice) = state.try_update(|s| s.add_new(&mut rand::thread_rng())) {
                notices.show(notice);
            }
        }
    };

    let handle_save = Callback::new({
        let notices = notices.clone();
        move |_: ()| {
            if let Some(notice) = state.try_update(|s| s.save()).flatten() {
                notices.show(notice);
            }
        }
    });

    view! {
        <div class="page category-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Category Management"}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_add_new>
                        {icon("plus")}
                        {"Add New Category"}
                    </Button>
                </div>
            </div>

            <div class="table-container">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Bottom Threshold"</TableHeaderCell>
                            <TableHeaderCell>"Top Threshold"</TableHeaderCell>
                            <TableHeaderCell>"Portion Size"</TableHeaderCell>
                            <TableHeaderCell>"Company"</TableHeaderCell>
                            <TableHeaderCell>"Sales Price"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let notices = notices.clone();
                            state.with(rows).into_iter().map(move |row| {
                                let id = row.id;
                                let notices = notices.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.bottom_threshold}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.top_threshold}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.portion_size}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.company}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.sales_price}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Space>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| state.update(|s| s.begin_edit(id))
                                                    >
                                                        {icon("edit")}
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        class="button--danger"
                                                        on_click=move |_| {
                                                            if let Some(notice) = state.try_update(|s| s.delete(id)) {
                                                                notices.show(notice);
                                                            }
                                                        }
                                                    >
                                                        {icon("delete")}
                                                        "Delete"
                                                    </Button>
                                                </Space>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || edit_key.get().map(|_| view! {
                <CategoryDetails state=state on_save=handle_save />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Company;

    #[test]
    fn test_row_from_category() {
        let category = Category {
            id: CategoryId::new(7),
            name: "Category 4".to_string(),
            bottom_threshold: 321,
            top_threshold: 150,
            portion_size: 3,
            company: Company::AdamMattkasse,
            sales_price: 57.1,
        };

        let row = CategoryRow::from(&category);

        assert_eq!(row.id, CategoryId::new(7));
        assert_eq!(row.bottom_threshold, "321");
        assert_eq!(row.top_threshold, "150");
        assert_eq!(row.company, "Adam Mattkasse");
        assert_eq!(row.sales_price, "$57.10");
    }

    #[test]
    fn test_rows_follow_list_order() {
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(8);
        let state = CategoryListState::seeded(&mut rng, 5);

        let ids: Vec<u32> = rows(&state).into_iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
