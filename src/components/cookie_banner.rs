use web_sys::MouseEvent;
use yew::prelude::*;

use crate::consent::{record_consent, should_show_banner, ConsentChoice, LocalStorageConsent};

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);

    // Storage is read once after mount
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(should_show_banner(&LocalStorageConsent));
                || ()
            },
            (),
        );
    }

    let choose = |choice: ConsentChoice| {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            record_consent(&LocalStorageConsent, choice);
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite">
            <div class="cookie-banner-label">
                <div class="cookie-banner-icon">{"i"}</div>
                <div>{"Cookies"}</div>
            </div>
            <div class="cookie-banner-actions">
                <button class="cookie-accept" onclick={choose(ConsentChoice::Accepted)}>
                    {"Accept"}
                </button>
                <button
                    class="cookie-dismiss"
                    aria-label="Close cookie banner"
                    onclick={choose(ConsentChoice::Dismissed)}
                >
                    {"✕"}
                </button>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                    width: 16rem;
                    background: rgba(255, 255, 255, 0.95);
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    border-radius: 0.375rem;
                    padding: 0.5rem 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                }
                .cookie-banner-label,
                .cookie-banner-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .cookie-banner-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 0.25rem;
                    background: rgba(var(--accent-rgb), 0.1);
                    color: var(--accent);
                    font-size: 12px;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .cookie-accept {
                    border: none;
                    border-radius: 0.375rem;
                    background: var(--accent);
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cookie-dismiss {
                    background: none;
                    border: none;
                    color: #6b7280;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
