use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation_default;

/// Single-open, collapsible accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

const FAQS: [(&str, &str); 5] = [
    (
        "How does MyIBDCompass help manage IBD symptoms?",
        "MyIBDCompass helps you track your meals, identify trigger foods, and understand patterns between your diet and symptoms. Our evidence-based recommendations and personalized insights empower you to make informed dietary choices that support your IBD management.",
    ),
    (
        "Is the dietary advice medically validated?",
        "Yes, all dietary guidelines and recommendations in MyIBDCompass are based on current scientific research and evidence-based practices for IBD management. However, always consult with your healthcare provider before making significant dietary changes.",
    ),
    (
        "Can I use MyIBDCompass alongside my current treatment plan?",
        "MyIBDCompass is designed to complement your existing treatment plan. It provides valuable insights that you can share with your healthcare team to optimize your overall IBD management strategy.",
    ),
    (
        "Is my health data secure?",
        "Your privacy and data security are our top priorities. We use industry-standard encryption and security measures to protect your personal health information. Your data is never shared with third parties without your explicit consent.",
    ),
    (
        "Can I export my data to share with my doctor?",
        "Yes! MyIBDCompass allows you to export comprehensive reports of your food logs, symptom tracking, and insights. You can easily share these reports with your healthcare provider to facilitate more informed discussions about your treatment.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    revealed: bool,
    delay: u32,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div
            class={classes!("faq-item", "reveal", props.revealed.then(|| "revealed"), props.is_open.then(|| "open"))}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">{props.answer.clone()}</div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let (section_ref, is_visible) = use_scroll_animation_default();
    let accordion = use_state(AccordionState::default);

    html! {
        <section id="faq" ref={section_ref} class="faq-section">
            <h2 class={classes!("section-title", "reveal", is_visible.then(|| "revealed"))}>
                <span class="highlight">{"FAQs"}</span>
            </h2>
            <p class={classes!("section-subtitle", "reveal", is_visible.then(|| "revealed"))}>
                {"Answers to questions you might have about MyIBDCompass"}
            </p>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| accordion.set(accordion.toggle(index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            answer={*answer}
                            is_open={accordion.is_open(index)}
                            revealed={is_visible}
                            delay={400 + index as u32 * 100}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    position: relative;
                }
                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq-item {
                    margin-bottom: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    background: #fff;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-item.open .faq-question {
                    color: var(--accent);
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open_and_collapsible() {
        let state = AccordionState::default();
        assert!(!state.is_open(0));

        let state = state.toggle(1);
        assert!(state.is_open(1));

        let state = state.toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(1));

        let state = state.toggle(3);
        assert!(!state.is_open(3));
    }
}
