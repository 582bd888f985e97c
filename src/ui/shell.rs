use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "shell",
            main { class: "panel",
                h1 { class: "title", "⚽ {APP_NAME} ⚽" }
                {children}
                p { class: "version", "{version}" }
            }
        }
    }
}
