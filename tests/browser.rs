#![cfg(target_arch = "wasm32")]

//! Browser-side checks for the pieces that need real timers and DOM nodes.
//! Run with `wasm-pack test --headless --chrome`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use forge_structural::components::contact_form::{ContactForm, ContactFormProps};
use forge_structural::contact::{
    run_submission, ContactGateway, ContactSubmission, Gateway, SubmitFuture, SubmitOutcome,
    SubmitPhase,
};
use forge_structural::phone::format_phone_fragment;

wasm_bindgen_test_configure!(run_in_browser);

/// Resolves without any delay, standing in for a real endpoint.
struct InstantGateway;

impl ContactGateway for InstantGateway {
    fn submit(&self, _submission: ContactSubmission) -> SubmitFuture {
        Box::pin(async { SubmitOutcome::Accepted })
    }
}

fn sample_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Dana Whitfield".into(),
        email: "dana@example.com".into(),
        phone: String::new(),
        service: "assessment".into(),
        message: "Cracked foundation wall, east side.".into(),
    }
}

#[wasm_bindgen_test]
async fn submission_phases_arrive_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = {
        let seen = seen.clone();
        move |phase: SubmitPhase| seen.borrow_mut().push(phase)
    };

    run_submission(Gateway::new(Rc::new(InstantGateway)), sample_submission(), 0, record).await;

    assert_eq!(
        *seen.borrow(),
        vec![SubmitPhase::Pending, SubmitPhase::Succeeded, SubmitPhase::Idle]
    );
}

#[wasm_bindgen_test]
async fn the_simulated_gateway_accepts_after_its_delay() {
    let outcome = Gateway::simulated().submit(sample_submission()).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[wasm_bindgen_test]
fn phone_input_reformats_in_place() {
    let document = web_sys::window().unwrap().document().unwrap();
    let input: web_sys::HtmlInputElement =
        document.create_element("input").unwrap().unchecked_into();

    input.set_value("5551234567");
    input.set_value(&format_phone_fragment(&input.value()));
    assert_eq!(input.value(), "(555) 123-4567");

    input.set_value(&format_phone_fragment(&input.value()));
    assert_eq!(input.value(), "(555) 123-4567");
}

/// A synthetic event that reaches the listeners the framework delegates
/// to the mount root.
fn bubbling(kind: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn mount_form(gateway: Gateway) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    yew::Renderer::<ContactForm>::with_root_and_props(host.clone(), ContactFormProps { gateway })
        .render();
    host
}

fn query(host: &web_sys::Element, selector: &str) -> web_sys::Element {
    host.query_selector(selector).unwrap().unwrap()
}

fn has_error_class(element: &web_sys::Element) -> bool {
    element
        .get_attribute("class")
        .map_or(false, |classes| classes.split_whitespace().any(|c| c == "error"))
}

// State flows back to the DOM on the render after an event, so every
// synthetic edit is followed by a short wait before the next one.
#[wasm_bindgen_test]
async fn a_successful_submission_clears_every_field() {
    let host = mount_form(Gateway::new(Rc::new(InstantGateway)));
    TimeoutFuture::new(50).await;

    let name: web_sys::HtmlInputElement = query(&host, "input[type='text']").unchecked_into();
    name.set_value("Dana Whitfield");
    name.dispatch_event(&bubbling("input")).unwrap();
    TimeoutFuture::new(50).await;

    let email: web_sys::HtmlInputElement = query(&host, "input[type='email']").unchecked_into();
    email.set_value("dana@example.com");
    email.dispatch_event(&bubbling("input")).unwrap();
    TimeoutFuture::new(50).await;

    let service: web_sys::HtmlSelectElement = query(&host, "select").unchecked_into();
    service.set_value("assessment");
    service.dispatch_event(&bubbling("change")).unwrap();
    TimeoutFuture::new(50).await;

    let message: web_sys::HtmlTextAreaElement = query(&host, "textarea").unchecked_into();
    message.set_value("Cracked foundation wall, east side.");
    message.dispatch_event(&bubbling("input")).unwrap();
    TimeoutFuture::new(50).await;

    query(&host, "form").dispatch_event(&bubbling("submit")).unwrap();
    TimeoutFuture::new(50).await;

    let button = query(&host, "button[type='submit']");
    assert!(button.has_attribute("disabled"));
    assert!(button.text_content().unwrap_or_default().contains("Message Sent!"));

    assert_eq!(name.value(), "");
    assert_eq!(email.value(), "");
    assert_eq!(service.value(), "");
    assert_eq!(message.value(), "");
}

#[wasm_bindgen_test]
async fn an_empty_required_field_is_the_only_one_marked() {
    let host = mount_form(Gateway::new(Rc::new(InstantGateway)));
    TimeoutFuture::new(50).await;

    let name: web_sys::HtmlInputElement = query(&host, "input[type='text']").unchecked_into();
    name.set_value("Dana Whitfield");
    name.dispatch_event(&bubbling("input")).unwrap();
    TimeoutFuture::new(50).await;

    let service: web_sys::HtmlSelectElement = query(&host, "select").unchecked_into();
    service.set_value("assessment");
    service.dispatch_event(&bubbling("change")).unwrap();
    TimeoutFuture::new(50).await;

    let message: web_sys::HtmlTextAreaElement = query(&host, "textarea").unchecked_into();
    message.set_value("Cracked foundation wall, east side.");
    message.dispatch_event(&bubbling("input")).unwrap();
    TimeoutFuture::new(50).await;

    // Email stays empty: the submit must mark it, leave every other field
    // unmarked, and never reach the pending state.
    query(&host, "form").dispatch_event(&bubbling("submit")).unwrap();
    TimeoutFuture::new(50).await;

    assert!(has_error_class(&query(&host, "input[type='email']")));
    assert!(!has_error_class(&query(&host, "input[type='text']")));
    assert!(!has_error_class(&query(&host, "input[type='tel']")));
    assert!(!has_error_class(&query(&host, "select")));
    assert!(!has_error_class(&query(&host, "textarea")));

    let button = query(&host, "button[type='submit']");
    assert!(!button.has_attribute("disabled"));
    assert!(button.text_content().unwrap_or_default().contains("Send Message"));
}
