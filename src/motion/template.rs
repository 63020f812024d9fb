use super::MotionValue;

/// Renders a number the way it reads inside a CSS value: integral values have
/// no fractional part and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

/// Interleaves `parts` with the current numbers in `values`.
///
/// `parts` normally has one more entry than `values`; any missing literal is
/// treated as empty.
pub fn render_template(parts: &[&str], values: &[f64]) -> String {
    let mut out = String::new();
    for (index, part) in parts.iter().enumerate() {
        out.push_str(part);
        if let Some(value) = values.get(index) {
            out.push_str(&format_number(*value));
        }
    }
    for value in values.iter().skip(parts.len()) {
        out.push_str(&format_number(*value));
    }
    out
}

/// Derives a live string built from literal `parts` and live numbers,
/// re-rendered whenever any of the numbers changes.
pub fn motion_template(parts: &[&'static str], values: &[MotionValue<f64>]) -> MotionValue<String> {
    let parts: Vec<&'static str> = parts.to_vec();
    let values: Vec<MotionValue<f64>> = values.to_vec();
    let snapshot = |values: &[MotionValue<f64>]| values.iter().map(MotionValue::get).collect::<Vec<_>>();

    let rendered = MotionValue::new(render_template(&parts, &snapshot(&values)));
    for value in &values {
        let target = rendered.downgrade();
        let parts = parts.clone();
        // Weak handles so the template does not keep its own inputs alive.
        let inputs: Vec<_> = values.iter().map(MotionValue::downgrade).collect();
        let subscription = value.on_change(move |_| {
            let Some(target) = target.upgrade() else {
                return;
            };
            let current: Option<Vec<f64>> = inputs
                .iter()
                .map(|input| input.upgrade().map(|v| v.get()))
                .collect();
            if let Some(current) = current {
                target.set(render_template(&parts, &current));
            }
        });
        rendered.retain(subscription);
    }
    rendered.retain(values);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASK: [&str; 3] = ["radial-gradient(50% 50% at ", "px ", "px, black, transparent)"];

    #[test]
    fn numbers_render_like_css_literals() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn render_interleaves_parts_and_values() {
        assert_eq!(
            render_template(&MASK, &[50.0, 30.0]),
            "radial-gradient(50% 50% at 50px 30px, black, transparent)"
        );
        assert_eq!(render_template(&["a", "b"], &[1.0, 2.0]), "a1b2");
        assert_eq!(render_template(&[], &[]), "");
    }

    #[test]
    fn template_tracks_each_input() {
        let x = MotionValue::new(0.0);
        let y = MotionValue::new(0.0);
        let mask = motion_template(&MASK, &[x.clone(), y.clone()]);
        assert_eq!(mask.get(), "radial-gradient(50% 50% at 0px 0px, black, transparent)");

        x.set(50.0);
        assert_eq!(mask.get(), "radial-gradient(50% 50% at 50px 0px, black, transparent)");

        y.set(-30.0);
        assert_eq!(mask.get(), "radial-gradient(50% 50% at 50px -30px, black, transparent)");
    }

    #[test]
    fn template_keeps_derived_inputs_alive() {
        let x = MotionValue::new(1.0);
        let doubled = crate::motion::transform(&x, (0.0, 1.0), (0.0, 2.0));
        let css = motion_template(&["", "px"], &[doubled]);

        x.set(3.0);
        assert_eq!(css.get(), "6px");
    }

    #[test]
    fn template_releases_inputs_when_dropped() {
        let x = MotionValue::new(1.0);
        let mask = motion_template(&["", "px"], &[x.clone()]);
        assert_eq!(x.subscriber_count(), 1);
        drop(mask);
        assert_eq!(x.subscriber_count(), 0);
    }
}
