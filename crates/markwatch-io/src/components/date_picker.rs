//! Read-only date field with a month-grid popover.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdChevronLeft, LdChevronRight};
use markwatch_core::calendar::WEEKDAY_LABELS;
use markwatch_core::{CalendarState, DayCell, Nav};

use crate::browser;

/// Props for the [`DatePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DatePickerProps {
    /// Called with the `DD-MM-YYYY` text when a date is picked, and with
    /// `None` on clear if `emit_on_clear` is set.
    on_change: EventHandler<Option<String>>,
    #[props(default = "DD-MM-YYYY".to_owned())]
    placeholder: String,
    /// Initial `DD-MM-YYYY` value. Malformed text is logged and ignored.
    #[props(default)]
    initial: Option<String>,
    #[props(default)]
    emit_on_clear: bool,
}

fn day_class(cell: DayCell) -> String {
    let mut class = String::from("datepicker-day");
    if !cell.in_month {
        class.push_str(" other-month");
    }
    if cell.is_today {
        class.push_str(" today");
    }
    if cell.is_selected {
        class.push_str(" selected");
    }
    class
}

/// Date field bound to its own [`CalendarState`].
///
/// The text field is display-only. Clicking it opens the calendar;
/// clicking anywhere outside closes it without a change.
#[component]
pub fn DatePicker(props: DatePickerProps) -> Element {
    let on_change = props.on_change;
    let emit_on_clear = props.emit_on_clear;
    let mut calendar = use_signal(|| {
        let mut state = CalendarState::new(browser::today());
        if let Some(text) = props.initial.as_deref()
            && let Err(e) = state.set_value(text)
        {
            tracing::warn!(text, error = %e, "ignoring malformed initial date");
        }
        state
    });

    let (open, display, title) = {
        let cal = calendar.read();
        (cal.is_open(), cal.display_value(), cal.title())
    };
    let cells = if open {
        calendar.read().grid(browser::today())
    } else {
        Vec::new()
    };

    rsx! {
        div { class: "datepicker",
            div { class: "datepicker-field",
                input {
                    r#type: "text",
                    class: "datepicker-input",
                    readonly: true,
                    placeholder: "{props.placeholder}",
                    value: "{display}",
                    onclick: move |_| calendar.write().open(),
                }
                span { class: "datepicker-icon",
                    Icon { width: 16, height: 16, icon: LdCalendar }
                }
            }

            if open {
                div {
                    class: "datepicker-backdrop",
                    onclick: move |_| calendar.write().close(),
                }
                div { class: "datepicker-calendar",
                    div { class: "datepicker-header",
                        button {
                            class: "datepicker-nav",
                            onclick: move |_| calendar.write().navigate(Nav::Prev),
                            Icon { width: 16, height: 16, icon: LdChevronLeft }
                        }
                        span { class: "datepicker-title", "{title}" }
                        button {
                            class: "datepicker-nav",
                            onclick: move |_| calendar.write().navigate(Nav::Next),
                            Icon { width: 16, height: 16, icon: LdChevronRight }
                        }
                    }
                    div { class: "datepicker-weekdays",
                        for label in WEEKDAY_LABELS {
                            span { "{label}" }
                        }
                    }
                    div { class: "datepicker-days",
                        for (i, cell) in cells.into_iter().enumerate() {
                            button {
                                key: "{i}",
                                class: day_class(cell),
                                disabled: !cell.in_month,
                                onclick: move |_| {
                                    if !cell.in_month {
                                        return;
                                    }
                                    let picked = calendar.write().select_day(cell.day);
                                    if let Some(text) = picked {
                                        on_change.call(Some(text));
                                    }
                                },
                                "{cell.day}"
                            }
                        }
                    }
                    div { class: "datepicker-footer",
                        button {
                            class: "datepicker-btn",
                            onclick: move |_| {
                                calendar.write().clear();
                                if emit_on_clear {
                                    on_change.call(None);
                                }
                            },
                            "Clear"
                        }
                        button {
                            class: "datepicker-btn primary",
                            onclick: move |_| {
                                let text = calendar.write().select_today(browser::today());
                                on_change.call(Some(text));
                            },
                            "Today"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_class_marks_state() {
        let cell = DayCell {
            day: 5,
            in_month: true,
            is_today: true,
            is_selected: true,
        };
        assert_eq!(day_class(cell), "datepicker-day today selected");
        let other = DayCell {
            in_month: false,
            is_today: false,
            is_selected: false,
            ..cell
        };
        assert_eq!(day_class(other), "datepicker-day other-month");
    }
}
