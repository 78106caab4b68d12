use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::waitlist::{submit_waitlist, Formspree, Role, SubmissionStatus, SubmitError, Ticket, WaitlistFlow};

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum WaitlistMsg {
    SetName(String),
    SetEmail(String),
    SetRole(Option<Role>),
    Submit,
    Completed(Ticket, Result<(), SubmitError>),
    SuccessElapsed(Ticket),
    Close,
}

pub struct WaitlistForm {
    flow: WaitlistFlow,
    endpoint: Formspree,
    // Dropping the timeout cancels it, so unmounting never fires a stale close.
    close_timeout: Option<Timeout>,
}

impl Component for WaitlistForm {
    type Message = WaitlistMsg;
    type Properties = WaitlistFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: WaitlistFlow::new(),
            endpoint: Formspree::new(config::get_form_endpoint()),
            close_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.is_open && !ctx.props().is_open {
            self.close_timeout = None;
            self.flow.close();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WaitlistMsg::SetName(name) => {
                self.flow.set_name(name);
                true
            }
            WaitlistMsg::SetEmail(email) => {
                self.flow.set_email(email);
                true
            }
            WaitlistMsg::SetRole(role) => {
                self.flow.set_role(role);
                true
            }
            WaitlistMsg::Submit => {
                let (ticket, payload) = match self.flow.begin_submit() {
                    Ok(started) => started,
                    Err(e) => {
                        log::debug!("Waitlist submit ignored: {}", e);
                        return false;
                    }
                };
                log::info!("Submitting waitlist signup for role {}", payload.role.as_str());
                let endpoint = self.endpoint.clone();
                ctx.link().send_future(async move {
                    let outcome = submit_waitlist(&endpoint, &payload).await;
                    WaitlistMsg::Completed(ticket, outcome)
                });
                true
            }
            WaitlistMsg::Completed(ticket, outcome) => {
                if let Err(e) = &outcome {
                    gloo_console::error!("Error submitting form:", e.to_string());
                }
                let succeeded = outcome.is_ok();
                if !self.flow.complete(ticket, outcome) {
                    log::debug!("Dropping reply for a closed waitlist form");
                    return false;
                }
                if succeeded {
                    let link = ctx.link().clone();
                    self.close_timeout = Some(Timeout::new(config::SUCCESS_CLOSE_DELAY_MS, move || {
                        link.send_message(WaitlistMsg::SuccessElapsed(ticket));
                    }));
                }
                true
            }
            WaitlistMsg::SuccessElapsed(ticket) => {
                self.close_timeout = None;
                if self.flow.finish_success(ticket) {
                    ctx.props().on_close.emit(());
                }
                true
            }
            WaitlistMsg::Close => {
                self.close_timeout = None;
                self.flow.close();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let link = ctx.link();
        let fields = self.flow.fields();
        let status = self.flow.status();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            WaitlistMsg::Submit
        });
        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WaitlistMsg::SetName(input.value())
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WaitlistMsg::SetEmail(input.value())
        });
        let on_role = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            WaitlistMsg::SetRole(Role::parse(&select.value()))
        });
        let on_close = link.callback(|_: MouseEvent| WaitlistMsg::Close);
        let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

        let selected_role = fields.role.map(Role::as_str).unwrap_or("");

        let button_content = match status {
            SubmissionStatus::Submitting => html! {
                <span class="button-inner">
                    <svg class="spinner" viewBox="0 0 24 24">
                        <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" fill="none" opacity="0.25" />
                        <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                    </svg>
                    {"Joining..."}
                </span>
            },
            SubmissionStatus::Success => html! {
                <span class="button-inner">
                    <svg class="check" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" clip-rule="evenodd" />
                    </svg>
                    {"Joined Successfully!"}
                </span>
            },
            _ => html! { {"Join Waitlist"} },
        };

        html! {
            <div class="waitlist-overlay" onclick={on_close.clone()}>
                <div class="waitlist-dialog" role="dialog" aria-modal="true" onclick={stop_propagation}>
                    <button class="waitlist-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                    <h2>{"Join the Waitlist"}</h2>
                    <p class="waitlist-description">
                        {"Be the first to know when MyIBDCompass launches in January 2026"}
                    </p>
                    <form {onsubmit}>
                        <div class="form-field">
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                placeholder="Enter your name"
                                value={fields.name.clone()}
                                oninput={on_name}
                                required=true
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter your email"
                                value={fields.email.clone()}
                                oninput={on_email}
                                required=true
                            />
                        </div>
                        <div class="form-field">
                            <label for="role">{"Role"}</label>
                            <select id="role" onchange={on_role} required=true>
                                <option value="" selected={selected_role.is_empty()} disabled=true>
                                    {"Select your role"}
                                </option>
                                { for Role::ALL.iter().map(|role| html! {
                                    <option value={role.as_str()} selected={selected_role == role.as_str()}>
                                        {role.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        {
                            match status {
                                SubmissionStatus::Error(message) => html! {
                                    <div class="form-message error">{message.clone()}</div>
                                },
                                SubmissionStatus::Success => html! {
                                    <div class="form-message success">
                                        {"Thanks for joining! We'll keep you updated about the launch."}
                                    </div>
                                },
                                _ => html! {},
                            }
                        }
                        <button
                            type="submit"
                            class={classes!("waitlist-submit", matches!(status, SubmissionStatus::Success).then(|| "succeeded"))}
                            disabled={status.is_locked()}
                        >
                            {button_content}
                        </button>
                    </form>
                </div>
                <style>
                    {r#"
                    .waitlist-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .waitlist-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 425px;
                        background: #fff;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }
                    .waitlist-dialog h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-align: center;
                    }
                    .waitlist-description {
                        text-align: center;
                        color: #6b7280;
                        margin-top: 0.5rem;
                    }
                    .waitlist-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #6b7280;
                    }
                    .waitlist-dialog form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding-top: 1rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .form-field input,
                    .form-field select {
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.375rem;
                    }
                    .form-message {
                        border-radius: 0.5rem;
                        padding: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .form-message.error {
                        background: #fef2f2;
                        color: #ef4444;
                    }
                    .form-message.success {
                        background: #f0fdf4;
                        color: #16a34a;
                    }
                    .waitlist-submit {
                        width: 100%;
                        padding: 0.625rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        color: #fff;
                        background: var(--accent);
                        font-weight: 600;
                        transition: all 0.2s;
                        cursor: pointer;
                    }
                    .waitlist-submit.succeeded {
                        background: #16a34a;
                    }
                    .waitlist-submit:disabled {
                        cursor: default;
                        opacity: 0.9;
                    }
                    .button-inner {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        animation: spin 1s linear infinite;
                    }
                    .check {
                        width: 1rem;
                        height: 1rem;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
