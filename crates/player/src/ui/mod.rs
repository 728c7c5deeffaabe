use dioxus::prelude::*;

pub mod gate;
pub mod hooks;
pub mod services;
pub mod shell;

pub use gate::{SessionSnapshot, ShellView};
pub use services::{use_services, Services};
pub use shell::{OnboardingShell, UserShell};

pub fn app() -> Element {
    rsx! {
        UserShell {
            OnboardingShell {
                Home {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let session = hooks::use_session();
    let (sign_out, trigger_sign_out) = hooks::use_sign_out();

    let greeting = session
        .user
        .as_ref()
        .and_then(|user| user.display_name.clone())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div { class: "home",
            h1 { "Hi {greeting}" }
            button {
                class: "button button--secondary",
                disabled: sign_out.is_pending(),
                onclick: move |_| trigger_sign_out.call(()),
                "Sign out"
            }
        }
    }
}
