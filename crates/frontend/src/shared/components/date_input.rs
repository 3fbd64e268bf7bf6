use leptos::prelude::*;
use thaw::DatePicker;
use wasm_bindgen::JsCast;

use crate::shared::components::ui::input_kind::DateMode;
use crate::shared::components::ui::input_state::InputState;
use crate::shared::date_utils::{combine_selection, format_time_value, resolve_time_input};

/// Date branch of the `Input` field: Thaw calendar picker, plus a native time
/// control in date-time mode.
///
/// The picker keeps its own `Option<NaiveDate>`; the field value is pushed into
/// it, and user selections go back through [`InputState::commit_selection`].
#[component]
pub fn DateInput(
    /// Id of the picker wrapper
    id: String,
    /// Id of the label element
    labelled_by: String,
    state: InputState,
    mode: DateMode,
    /// Classes of the picker control
    #[prop(into)]
    class: Signal<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    required: bool,
    /// Shown as a hint on the wrapper
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// `step` of the time control, seconds
    #[prop(default = 900)]
    time_step: u32,
) -> impl IntoView {
    let with_time = mode == DateMode::DateTime;

    // Seed the picker synchronously so the first selection pass matches the value
    let initial = untrack(|| state.parsed_value(mode));
    let picked_date = RwSignal::new(initial.map(|dt| dt.date()));
    let picked_time = RwSignal::new(initial.filter(|_| with_time).map(|dt| dt.time()));
    let wrapper = NodeRef::<leptos::html::Fieldset>::new();

    let show = move |shown: Option<chrono::NaiveDateTime>| {
        let date = shown.map(|dt| dt.date());
        if picked_date.get_untracked() != date {
            picked_date.set(date);
        }
        if with_time {
            let time = shown.map(|dt| dt.time());
            if picked_time.get_untracked() != time {
                picked_time.set(time);
            }
        }
    };

    // value -> picker
    Effect::new(move |_| show(state.parsed_value(mode)));

    // picker -> parent; a selection the parent ignored is rolled back
    Effect::new(move |_| {
        let selection = combine_selection(picked_date.get(), picked_time.get(), mode);
        let shown = state.commit_selection(selection, mode);
        if shown != selection {
            show(shown);
        }
    });

    // Thaw's picker takes no `required`, set it on its text box directly
    if required {
        Effect::new(move |_| {
            let Some(root) = wrapper.get() else {
                return;
            };
            match root.query_selector("input:not([type=time])") {
                Ok(Some(field)) => {
                    if let Err(err) = field.set_attribute("required", "") {
                        log::debug!("DateInput: cannot mark picker required: {:?}", err);
                    }
                }
                Ok(None) => log::debug!("DateInput: picker input not found"),
                Err(err) => log::debug!("DateInput: picker lookup failed: {:?}", err),
            }
        });
    }

    let on_focus_out = move |ev: leptos::ev::FocusEvent| {
        // Moving between the calendar and the time control keeps the focus style
        let stays_inside = ev
            .related_target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(wrapper.get_untracked())
            .is_some_and(|(next, root)| root.contains(Some(&next)));
        if !stays_inside {
            state.blur();
        }
    };

    let picker_class = Signal::derive(move || Some(class.get()));

    view! {
        <fieldset
            node_ref=wrapper
            id=id
            class="form__picker"
            aria-labelledby=labelled_by
            aria-required=required.then_some("true")
            title=move || placeholder.get().unwrap_or_default()
            disabled=move || disabled.get()
            on:focusin=move |_| state.focus()
            on:focusout=on_focus_out
        >
            <DatePicker value=picked_date class=picker_class />
            {with_time.then(|| view! {
                <input
                    type="time"
                    class="form__input form__time"
                    step=time_step.to_string()
                    required=required
                    prop:value=move || format_time_value(picked_time.get())
                    on:input=move |ev| {
                        let reported = event_target_value(&ev);
                        picked_time.set(resolve_time_input(&reported, picked_time.get_untracked()));
                    }
                />
            })}
        </fieldset>
    }
}
