use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill-shaped call-to-action button. Carries no handler of its own.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button type="button" class={classes!("cta-button", props.class.clone())}>
            <span class="cta-button__glow"></span>
            <span class="cta-button__label">{ props.label.clone() }</span>
            <style>
                {r#"
                .cta-button {
                    position: relative;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 0.5rem;
                    background: linear-gradient(to bottom, #190d2e, #4a208a);
                    box-shadow: 0 0 12px #8c45ff;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                }

                .cta-button__glow {
                    position: absolute;
                    inset: 0;
                    border-radius: inherit;
                    mask-image: linear-gradient(to bottom, black, transparent);
                    -webkit-mask-image: linear-gradient(to bottom, black, transparent);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .cta-button__label {
                    position: relative;
                }
                "#}
            </style>
        </button>
    }
}
