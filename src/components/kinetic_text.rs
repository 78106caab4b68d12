use yew::prelude::*;

const LETTER_STAGGER_SECS: f64 = 0.05;

#[derive(Properties, PartialEq)]
pub struct KineticTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the first letter starts.
    #[prop_or_default]
    pub delay: f64,
}

/// Splits text into letters with staggered animation delays. Spaces become
/// non-breaking so inline-block letters keep their gaps.
pub fn kinetic_letters(text: &str, delay: f64) -> Vec<(char, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let shown = if c == ' ' { '\u{00A0}' } else { c };
            (shown, delay + i as f64 * LETTER_STAGGER_SECS)
        })
        .collect()
}

#[function_component(KineticText)]
pub fn kinetic_text(props: &KineticTextProps) -> Html {
    html! {
        <span class={props.class.clone()}>
            { for kinetic_letters(&props.text, props.delay).into_iter().enumerate().map(|(i, (letter, delay))| html! {
                <span
                    key={i}
                    class="letter kinetic-letter"
                    style={format!("animation-delay: {:.2}s;", delay)}
                >
                    {letter.to_string()}
                </span>
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_staggered_and_spaces_kept() {
        let letters = kinetic_letters("a b", 0.2);
        assert_eq!(letters.len(), 3);
        assert_eq!(letters[1].0, '\u{00A0}');
        assert!((letters[0].1 - 0.2).abs() < 1e-12);
        assert!((letters[2].1 - 0.3).abs() < 1e-12);
    }
}
