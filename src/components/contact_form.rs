//! Contact form component: validation marks on blur and submit, live phone
//! formatting, and the pending / success / reset cycle on the button.

use std::collections::HashSet;

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{self, ContactSubmission, Field, FieldValues, Gateway, SubmitPhase};
use crate::phone::format_phone_fragment;
use crate::visual;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Submission capability; the fixed-delay stand-in unless substituted.
    #[prop_or_else(Gateway::simulated)]
    pub gateway: Gateway,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let values = use_state(FieldValues::default);
    let invalid = use_state(HashSet::<Field>::new);
    let phase = use_state(SubmitPhase::default);

    // The select's live selection is written through its node ref: a
    // selected attribute cannot move a selection the user has already made.
    let select_ref = use_node_ref();
    {
        let select_ref = select_ref.clone();
        use_effect_with_deps(
            move |service: &String| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    if select.value() != *service {
                        select.set_value(service);
                    }
                }
                || ()
            },
            (*values).service.clone(),
        );
    }

    // Shared edit path: store the new text and clear the field's error mark
    // as soon as the user types anything.
    let edit_field = {
        let values = values.clone();
        let invalid = invalid.clone();
        move |field: Field, value: String| {
            let mut next = (*values).clone();
            next.set(field, value);
            values.set(next);
            if invalid.contains(&field) {
                let mut cleared = (*invalid).clone();
                cleared.remove(&field);
                invalid.set(cleared);
            }
        }
    };

    let on_name_input = {
        let edit = edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(Field::Name, input.value());
        })
    };

    let on_email_input = {
        let edit = edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(Field::Email, input.value());
        })
    };

    let on_phone_input = {
        let edit = edit_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone_fragment(&input.value());
            input.set_value(&formatted);
            edit(Field::Phone, formatted);
        })
    };

    let on_service_change = {
        let edit = edit_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit(Field::Service, select.value());
        })
    };

    let on_message_input = {
        let edit = edit_field;
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit(Field::Message, area.value());
        })
    };

    let blur_check = {
        let values = values.clone();
        let invalid = invalid.clone();
        move |field: Field| {
            let values = values.clone();
            let invalid = invalid.clone();
            Callback::from(move |_: FocusEvent| {
                let mut marks = (*invalid).clone();
                let changed = if contact::field_missing(&values, field) {
                    marks.insert(field)
                } else {
                    marks.remove(&field)
                };
                if changed {
                    invalid.set(marks);
                }
            })
        }
    };

    let onsubmit = {
        let values = values.clone();
        let invalid = invalid.clone();
        let phase = phase.clone();
        let gateway = props.gateway.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let missing = contact::missing_required(&values);
            if !missing.is_empty() {
                invalid.set(missing.into_iter().collect());
                return;
            }
            invalid.set(HashSet::new());

            let submission = ContactSubmission::from(&*values);
            log!("contact form: dispatching submission");

            let gateway = gateway.clone();
            let phase = phase.clone();
            let values = values.clone();
            spawn_local(contact::run_submission(
                gateway,
                submission,
                config::SUBMIT_RESET_DELAY_MS,
                move |next| {
                    if next.clears_fields() {
                        values.set(FieldValues::default());
                    }
                    phase.set(next);
                },
            ));
        })
    };

    let field_class = |field: Field| classes!(invalid.contains(&field).then(|| visual::ERROR));
    let submit_style = phase.background_override().map(|color| format!("background: {color};"));

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label>{"Name *"}</label>
                    <input
                        type="text"
                        placeholder="Your full name"
                        value={(*values).name.clone()}
                        class={field_class(Field::Name)}
                        oninput={on_name_input}
                        onblur={blur_check(Field::Name)}
                    />
                </div>
                <div class="form-group">
                    <label>{"Email *"}</label>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        value={(*values).email.clone()}
                        class={field_class(Field::Email)}
                        oninput={on_email_input}
                        onblur={blur_check(Field::Email)}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>{"Phone"}</label>
                    <input
                        type="tel"
                        placeholder="(555) 555-5555"
                        value={(*values).phone.clone()}
                        class={field_class(Field::Phone)}
                        oninput={on_phone_input}
                        onblur={blur_check(Field::Phone)}
                    />
                </div>
                <div class="form-group">
                    <label>{"Service *"}</label>
                    <select
                        ref={select_ref}
                        class={field_class(Field::Service)}
                        onchange={on_service_change}
                        onblur={blur_check(Field::Service)}
                    >
                        <option value="" disabled={true} selected={(*values).service.is_empty()}>
                            {"Select a service"}
                        </option>
                        <option value="residential">{"Residential Design"}</option>
                        <option value="commercial">{"Commercial & Industrial"}</option>
                        <option value="assessment">{"Structural Assessment"}</option>
                        <option value="renovation">{"Renovation & Additions"}</option>
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label>{"Project details *"}</label>
                <textarea
                    rows="5"
                    placeholder="Tell us about the structure, the timeline, and anything already on paper."
                    value={(*values).message.clone()}
                    class={field_class(Field::Message)}
                    oninput={on_message_input}
                    onblur={blur_check(Field::Message)}
                />
            </div>
            <button
                type="submit"
                class="submit-button"
                disabled={phase.submit_disabled()}
                style={submit_style}
            >
                {
                    match *phase {
                        SubmitPhase::Idle => html! { <span>{"Send Message"}</span> },
                        SubmitPhase::Pending => html! {
                            <>
                                <svg class="spinner" width="20" height="20" viewBox="0 0 24 24"
                                    fill="none" stroke="currentColor" stroke-width="2">
                                    <circle cx="12" cy="12" r="10"
                                        stroke-dasharray="60" stroke-dashoffset="20" />
                                </svg>
                                <span>{"Sending..."}</span>
                            </>
                        },
                        SubmitPhase::Succeeded => html! {
                            <>
                                <svg width="20" height="20" viewBox="0 0 24 24"
                                    fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M20 6L9 17l-5-5" />
                                </svg>
                                <span>{"Message Sent!"}</span>
                            </>
                        },
                    }
                }
            </button>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .form-group label {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: var(--color-text-muted);
                    letter-spacing: 0.02em;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    background: var(--color-bg);
                    border: 1px solid var(--color-border);
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    color: var(--color-text);
                    font: inherit;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }

                .form-group input:focus,
                .form-group select:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: var(--color-accent);
                }

                .form-group textarea {
                    resize: vertical;
                    min-height: 120px;
                }

                .submit-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: var(--color-accent);
                    color: #1c1300;
                    font-weight: 700;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 1.4rem;
                    cursor: pointer;
                    transition: filter 0.2s ease, background 0.3s ease;
                }

                .submit-button:hover:enabled {
                    filter: brightness(1.1);
                }

                .submit-button:disabled {
                    cursor: default;
                    opacity: 0.85;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                .spinner {
                    animation: spin 1s linear infinite;
                }

                @media (max-width: 640px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </form>
    }
}
