use dioxus::prelude::*;

use crate::routine::RoutineBoard;

use super::use_active_child_id;

#[component]
pub fn Routines() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let active_child = use_active_child_id();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-routines",
            h1 { {crate::t!("page-routines-title")} }
            p { {crate::t!("page-routines-intro")} }

            if let Some(Some(child_id)) = active_child() {
                RoutineBoard { child_id }
            } else {
                p { class: "page__placeholder", "Add a child profile to set up routines." }
            }
        }
    }
}
