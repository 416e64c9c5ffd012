//! Показ уведомлений списка через thaw Toaster.
//!
//! Операции над данными только возвращают `CategoryNotice`; время показа
//! и оформление задаются здесь.

use crate::domain::a001_category::ui::list::state::{CategoryNotice, NoticeSeverity};
use crate::shared::config::Config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

fn intent(severity: NoticeSeverity) -> ToastIntent {
    match severity {
        NoticeSeverity::Success => ToastIntent::Success,
        NoticeSeverity::Error => ToastIntent::Error,
    }
}

/// Сервис уведомлений страницы
#[derive(Clone)]
pub struct NoticeService {
    toaster: ToasterInjection,
    duration: Duration,
}

impl NoticeService {
    /// Берёт Toaster и длительность показа из контекста
    pub fn from_context() -> Self {
        let config = use_context::<Config>().unwrap_or_default();
        Self {
            toaster: ToasterInjection::expect_context(),
            duration: Duration::from_millis(config.notifications.duration_ms),
        }
    }

    pub fn show(&self, notice: CategoryNotice) {
        log::debug!("notice: {} ({:?})", notice.title, notice.severity);

        let toast_id = uuid::Uuid::new_v4();
        let toaster = self.toaster.clone();
        let options = ToastOptions::default()
            .with_id(toast_id)
            .with_intent(intent(notice.severity))
            .with_timeout(self.duration);

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{notice.title}</ToastTitle>
                        <ToastBody>
                            <div class="toast-body">
                                <span>{notice.description}</span>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |_| toaster.dismiss_toast(toast_id)
                                >
                                    {icon("close")}
                                </Button>
                            </div>
                        </ToastBody>
                    </Toast>
                }
            },
            options,
        );
    }
}
