//! Window-kind to app-view dispatch.

use desktop_app_about::AboutApp;
use desktop_app_contract::AppHost;
use desktop_app_experience::ExperienceApp;
use desktop_app_fun::FunApp;
use desktop_app_resume::ResumeApp;
use desktop_app_terminal::TerminalApp;
use leptos::*;

use crate::model::{WindowKind, WindowRecord};

/// Mounts the content view for a window record.
///
/// Unknown kinds render a placeholder body instead of failing, so records
/// carrying a [`WindowKind::Other`] tag stay harmless.
pub fn render_window_contents(window: &WindowRecord, host: AppHost, mobile: bool) -> View {
    match &window.kind {
        WindowKind::About => view! { <AboutApp /> }.into_view(),
        WindowKind::Experience => view! { <ExperienceApp /> }.into_view(),
        WindowKind::Resume => view! { <ResumeApp mobile=mobile /> }.into_view(),
        WindowKind::Terminal => view! { <TerminalApp window_id=window.id.0 /> }.into_view(),
        WindowKind::Fun => view! { <FunApp host=host mobile=mobile /> }.into_view(),
        WindowKind::Other(_) => {
            view! { <p class="window-unknown">"Unknown window type"</p> }.into_view()
        }
    }
}
