//! Horizontal tab strip.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabsProps {
    labels: Vec<&'static str>,
    active: usize,
    on_select: EventHandler<usize>,
}

#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let on_select = props.on_select;
    rsx! {
        div { class: "tab-strip", role: "tablist",
            for (i, label) in props.labels.iter().copied().enumerate() {
                button {
                    key: "{label}",
                    class: if i == props.active { "tab-btn active" } else { "tab-btn" },
                    role: "tab",
                    onclick: move |_| on_select.call(i),
                    "{label}"
                }
            }
        }
    }
}
