use yew::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::hooks::{use_linear_loop, use_relative_mouse_position, use_scroll, use_style_binding};
use crate::motion::scroll::ScrollOffset;
use crate::motion::{motion_template, transform, MotionValue};

const SPOTLIGHT_MASK: [&str; 3] = ["radial-gradient(50% 50% at ", "px ", "px, black, transparent)"];
const PIXELS: [&str; 2] = ["", "px"];

/// "Contact Us" panel: a drifting star field with parallax, a grid spotlight
/// that follows the mouse on hover, and the contact form.
#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let section_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let spotlight_ref = use_node_ref();

    // Vertical parallax
    let scroll_y_progress = use_scroll(section_ref.clone(), ScrollOffset::ENTER_TO_EXIT);
    let background_y = use_memo(
        |progress| motion_template(&PIXELS, &[transform(progress, (0.0, 1.0), config::PARALLAX_RANGE)]),
        scroll_y_progress,
    );

    // Horizontal drift
    let drift = use_linear_loop(config::STARS.width as f64, config::STARS_LOOP_MS);
    let background_x = use_memo(|drift| motion_template(&PIXELS, &[drift.clone()]), drift);

    let (mouse_x, mouse_y) = use_relative_mouse_position(panel_ref.clone());
    let mask_image = use_memo(
        |(x, y): &(MotionValue<f64>, MotionValue<f64>)| motion_template(&SPOTLIGHT_MASK, &[x.clone(), y.clone()]),
        (mouse_x, mouse_y),
    );

    use_style_binding(panel_ref.clone(), "background-position-x", (*background_x).clone());
    use_style_binding(panel_ref.clone(), "background-position-y", (*background_y).clone());
    use_style_binding(spotlight_ref.clone(), "mask-image", (*mask_image).clone());
    use_style_binding(spotlight_ref.clone(), "-webkit-mask-image", (*mask_image).clone());

    let stars = format!("background-image: {};", config::STARS.css_url());
    let grid = format!("background-image: {};", config::GRID_LINES.css_url());

    html! {
        <section class="cta" ref={section_ref}>
            <div class="cta__container">
                <div class="cta__panel" ref={panel_ref} style={stars}>
                    <div class="cta__grid cta__grid--static" style={grid.clone()}></div>
                    <div class="cta__grid cta__grid--spotlight" ref={spotlight_ref} style={grid}></div>
                    <div class="cta__content">
                        <h2 class="cta__title">{"Contact Us"}</h2>
                        <p class="cta__subtitle">
                            {"We're here to help you. Send us a message, and we'll get back to you soon."}
                        </p>
                        <form class="cta__form">
                            <input type="text" placeholder="Full Name" class="cta__field" />
                            <input type="email" placeholder="Email" class="cta__field" />
                            <input type="tel" placeholder="Phone" class="cta__field" />
                            <textarea placeholder="Message" class="cta__field" rows="4"></textarea>
                            <div class="cta__actions">
                                <Button label="Send" class="cta__send" />
                            </div>
                        </form>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .cta {
                    padding: 3rem 0;
                }

                .cta__container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                }

                .cta__panel {
                    position: relative;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 0.75rem;
                    padding: 4rem 1.5rem;
                }

                .cta__grid {
                    position: absolute;
                    inset: 0;
                    background-color: rgb(74, 32, 138);
                    background-blend-mode: overlay;
                    transition: opacity 700ms;
                }

                .cta__grid--static {
                    mask-image: radial-gradient(50% 50% at 50% 35%, black, transparent);
                    -webkit-mask-image: radial-gradient(50% 50% at 50% 35%, black, transparent);
                }

                .cta__grid--spotlight {
                    opacity: 0;
                }

                .cta__panel:hover .cta__grid--static {
                    opacity: 0;
                }

                .cta__panel:hover .cta__grid--spotlight {
                    opacity: 1;
                }

                .cta__content {
                    position: relative;
                }

                .cta__title {
                    margin: 0 auto;
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 500;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                }

                .cta__subtitle {
                    margin: 0.75rem auto 0;
                    text-align: center;
                    font-size: 1rem;
                    letter-spacing: -0.025em;
                    color: rgba(255, 255, 255, 0.7);
                }

                .cta__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 24rem;
                    margin: 2rem auto 0;
                    color: #ffffff;
                }

                .cta__field {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.375rem;
                    background: transparent;
                    color: #ffffff;
                    font: inherit;
                    transition: box-shadow 300ms;
                }

                .cta__field::placeholder {
                    color: rgba(255, 255, 255, 0.6);
                }

                .cta__field:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #9333ea;
                }

                .cta__actions {
                    display: flex;
                    justify-content: center;
                    margin-top: 1rem;
                }

                .cta__send {
                    padding: 0.5rem 2rem;
                }

                @media (min-width: 768px) {
                    .cta {
                        padding: 4rem 0;
                    }

                    .cta__panel {
                        padding: 4rem 2.5rem;
                    }

                    .cta__title {
                        font-size: 3rem;
                    }

                    .cta__subtitle {
                        font-size: 1.125rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, HtmlElement, MouseEvent, MouseEventInit};

    use crate::dom::ElementRect;
    use crate::motion::scroll::scroll_progress;
    use crate::motion::template::render_template;
    use crate::motion::transform::interpolate;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root(left: u32, top: u32) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute(
            "style",
            &format!("position: absolute; left: {}px; top: {}px; width: 600px;", left, top),
        )
        .unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    // Lets the scheduler render and run effects.
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    fn find(root: &Element, selector: &str) -> HtmlElement {
        root.query_selector(selector).unwrap().unwrap().unchecked_into()
    }

    /// `css` as the browser serialises it back out of an inline style.
    fn serialized(property: &str, css: &str) -> String {
        let document = web_sys::window().unwrap().document().unwrap();
        let scratch: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        scratch.style().set_property(property, css).unwrap();
        scratch.style().get_property_value(property).unwrap()
    }

    fn mouse_move(x: f64, y: f64) {
        let mut init = MouseEventInit::new();
        init.client_x(x as i32).client_y(y as i32);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn spotlight_follows_mouse_until_unmounted() {
        let root = mount_root(100, 50);
        let handle = yew::Renderer::<CallToAction>::with_root(root.clone()).render();
        settle().await;

        let panel = find(&root, ".cta__panel");
        let spotlight = find(&root, ".cta__grid--spotlight");
        let rect = panel.bounding_rect().unwrap();
        let (x, y) = ((rect.left + 50.0).round(), (rect.top + 30.0).round());

        mouse_move(x, y);

        let expected = render_template(&SPOTLIGHT_MASK, &[x - rect.left, y - rect.top]);
        let mask = spotlight.style().get_property_value("mask-image").unwrap();
        assert_eq!(mask, serialized("mask-image", &expected));

        handle.destroy();
        settle().await;
        mouse_move(x + 40.0, y + 40.0);

        assert_eq!(spotlight.style().get_property_value("mask-image").unwrap(), mask);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn star_field_shifts_with_scroll() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let spacer = document.create_element("div").unwrap();
        spacer.set_attribute("style", "height: 4000px;").unwrap();
        document.body().unwrap().append_child(&spacer).unwrap();

        let root = mount_root(0, 600);
        let handle = yew::Renderer::<CallToAction>::with_root(root.clone()).render();
        settle().await;

        window.scroll_to_with_x_and_y(0.0, 300.0);
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();

        let section = find(&root, "section.cta");
        let panel = find(&root, ".cta__panel");
        let viewport = window.inner_height().unwrap().as_f64().unwrap();
        let progress = scroll_progress(&section.bounding_rect().unwrap(), viewport, &ScrollOffset::ENTER_TO_EXIT);
        let offset = interpolate(progress, (0.0, 1.0), config::PARALLAX_RANGE, false);
        let expected = render_template(&PIXELS, &[offset]);

        assert_eq!(
            panel.style().get_property_value("background-position-y").unwrap(),
            serialized("background-position-y", &expected)
        );

        handle.destroy();
        root.remove();
        spacer.remove();
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
