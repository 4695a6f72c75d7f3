//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived state signals and the reducer dispatch
//! callback. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    host,
    model::{default_desktop_icons, DesktopState, IconRecord, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window collection and id counter.
    pub state: RwSignal<DesktopState>,
    /// Reactive desktop icon list.
    pub icons: RwSignal<Vec<IconRecord>>,
    /// Reactive pointer drag/resize interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let icons = create_rw_signal(default_desktop_icons());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut icon_list = icons.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_icons = icon_list.clone();
        let previous_ui = ui;

        let effects = reduce_desktop(&mut desktop, &mut icon_list, &mut ui, action);

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if icon_list != previous_icons {
            icons.set(icon_list);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        for effect in effects {
            host::run_runtime_effect(effect);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        icons,
        interaction,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
