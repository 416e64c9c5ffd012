use crate::domain::a001_category::ui::list::CategoryList;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация читается один раз при старте и раздаётся через context
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <div class="container">
                    <CategoryList />
                </div>
            </ToasterProvider>
        </ConfigProvider>
    }
}
