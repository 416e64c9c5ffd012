use super::view_model::CategoryDetailsViewModel;
use crate::domain::a001_category::ui::list::state::CategoryListState;
use crate::shared::icons::icon;
use contracts::domain::a001_category::FieldName;
use contracts::enums::Company;
use leptos::prelude::*;
use thaw::*;

const PORTION_SIZES: std::ops::RangeInclusive<u8> = 1..=6;

/// Подпись поля с отметкой обязательности
fn field_label(name: FieldName) -> impl IntoView {
    view! {
        <label>
            {name.label()}
            <span class="required" aria-hidden="true">" *"</span>
        </label>
    }
}

#[component]
pub fn CategoryDetails(
    state: RwSignal<CategoryListState>,
    on_save: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(state);

    let text_input = move |name: FieldName, input_type: &'static str| {
        view! {
            <div class="form-group">
                {field_label(name)}
                <input
                    type=input_type
                    required=true
                    prop:value=move || vm.input(name).get()
                    on:input=move |ev| vm.change_command(name, event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="details-container category-details">
            {text_input(FieldName::BottomThreshold, "text")}
            {text_input(FieldName::TopThreshold, "text")}

            <div class="form-group">
                {field_label(FieldName::PortionSize)}
                <select
                    required=true
                    prop:value=move || vm.portion_size.get()
                    on:change=move |ev| vm.change_command(FieldName::PortionSize, event_target_value(&ev))
                >
                    {PORTION_SIZES.map(|size| {
                        let value = size.to_string();
                        let current = value.clone();
                        view! {
                            <option value=value selected=move || vm.portion_size.get() == current>
                                {format!("Size {}", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                {field_label(FieldName::Company)}
                <select
                    required=true
                    prop:value=move || vm.company.get()
                    on:change=move |ev| vm.change_command(FieldName::Company, event_target_value(&ev))
                >
                    {Company::all().into_iter().map(|company| view! {
                        <option
                            value=company.display_name()
                            selected=move || vm.company.get() == company.display_name()
                        >
                            {company.display_name()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            {text_input(FieldName::SalesPrice, "number")}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    {icon("save")}
                    {"Save Changes"}
                </Button>
            </div>
        </div>
    }
}
