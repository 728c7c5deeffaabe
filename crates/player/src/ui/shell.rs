//! Shell components
//!
//! `UserShell` owns the current-user query and the loading/confirmation
//! gates; `OnboardingShell` sits inside it and owns the onboarding gate.
//! Each re-evaluates its guards on every render.

use dioxus::prelude::*;

use quizdeck_domain::CategoryId;
use quizdeck_shared::WireResult;

use crate::ui::gate::{self, ShellView};
use crate::ui::hooks::{
    session_snapshot, use_complete_onboarding, use_current_user_provider, use_session,
    use_sign_out,
};
use crate::ui::services::use_services;

#[component]
pub fn UserShell(children: Element) -> Element {
    let current_user = use_current_user_provider();
    let session = session_snapshot(&current_user);

    match gate::evaluate(gate::USER_SHELL_GUARDS, &session) {
        ShellView::Loading => rsx! { LoadingScreen {} },
        ShellView::Unconfirmed => {
            let email = session.user.map(|user| user.email).unwrap_or_default();
            rsx! { UnconfirmedScreen { email } }
        }
        _ => rsx! { {children} },
    }
}

#[component]
pub fn OnboardingShell(children: Element) -> Element {
    let session = use_session();

    match gate::evaluate(gate::ONBOARDING_SHELL_GUARDS, &session) {
        ShellView::Onboarding => rsx! { OnboardingScreen {} },
        _ => rsx! { {children} },
    }
}

#[component]
fn LoadingScreen() -> Element {
    rsx! {
        div { class: "shell shell--loading",
            div { class: "skeleton skeleton--title" }
            div { class: "skeleton skeleton--line" }
            div { class: "skeleton skeleton--line" }
        }
    }
}

#[component]
fn UnconfirmedScreen(email: String) -> Element {
    let (sign_out, trigger_sign_out) = use_sign_out();

    rsx! {
        div { class: "shell shell--unconfirmed",
            h1 { "Confirm your email" }
            p { "We sent a confirmation link to {email}. Follow it to continue." }
            button {
                class: "button button--secondary",
                disabled: sign_out.is_pending(),
                onclick: move |_| trigger_sign_out.call(()),
                "Sign out"
            }
        }
    }
}

#[component]
fn OnboardingScreen() -> Element {
    let services = use_services();
    let (onboarding, complete) = use_complete_onboarding();
    let mut display_name = use_signal(String::new);
    let selected = use_signal(Vec::<CategoryId>::new);

    let categories_service = services.categories.clone();
    let categories = use_resource(move || {
        let service = categories_service.clone();
        async move { service.list_categories().await }
    });

    let error = match &*onboarding.result().read() {
        Some(WireResult::Failure { error }) => Some(error.message.clone()),
        _ => None,
    };

    let picker = match &*categories.read() {
        None => rsx! { div { class: "skeleton skeleton--line" } },
        Some(WireResult::Failure { error }) => rsx! {
            p { class: "error", "{error.message}" }
        },
        Some(WireResult::Success { value }) => rsx! {
            ul { class: "tags",
                for category in value.categories.clone() {
                    CategoryTag {
                        key: "{category.id}",
                        id: category.id.clone(),
                        name: category.name.clone(),
                        selected,
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "shell shell--onboarding",
            h1 { "Welcome! Let's set things up" }
            input {
                class: "input",
                placeholder: "Display name",
                value: "{display_name}",
                oninput: move |evt| display_name.set(evt.value()),
            }
            {picker}
            {error.map(|message| rsx! { p { class: "error", "{message}" } })}
            button {
                class: "button button--primary",
                disabled: onboarding.is_pending() || display_name.read().trim().is_empty(),
                onclick: move |_| {
                    complete.call((display_name.read().trim().to_string(), selected.read().clone()));
                },
                "Continue"
            }
        }
    }
}

#[component]
fn CategoryTag(id: CategoryId, name: String, selected: Signal<Vec<CategoryId>>) -> Element {
    let mut selected = selected;
    let is_selected = selected.read().contains(&id);
    let class = if is_selected { "tag tag--selected" } else { "tag" };

    rsx! {
        li {
            class,
            onclick: move |_| {
                let mut picked = selected.write();
                if let Some(pos) = picked.iter().position(|picked_id| *picked_id == id) {
                    picked.remove(pos);
                } else {
                    picked.push(id.clone());
                }
            },
            "{name}"
        }
    }
}
