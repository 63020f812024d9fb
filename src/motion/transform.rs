use super::MotionValue;

/// Linearly maps `input` from `domain` onto `range`.
///
/// Values outside the domain are extrapolated unless `clamp` is set. A
/// degenerate domain maps everything to the start of the range.
pub fn interpolate(input: f64, domain: (f64, f64), range: (f64, f64), clamp: bool) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let span = d1 - d0;
    if span == 0.0 {
        return r0;
    }
    let mut progress = (input - d0) / span;
    if clamp {
        progress = progress.clamp(0.0, 1.0);
    }
    r0 + (r1 - r0) * progress
}

/// Derives a live value that follows `source` mapped from `domain` onto
/// `range`, without clamping.
pub fn transform(source: &MotionValue<f64>, domain: (f64, f64), range: (f64, f64)) -> MotionValue<f64> {
    let derived = MotionValue::new(interpolate(source.get(), domain, range, false));
    let target = derived.downgrade();
    let subscription = source.on_change(move |input| {
        if let Some(target) = target.upgrade() {
            target.set(interpolate(*input, domain, range, false));
        }
    });
    derived.retain(subscription);
    derived.retain(source.clone());
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARALLAX: ((f64, f64), (f64, f64)) = ((0.0, 1.0), (-100.0, 100.0));

    #[test]
    fn parallax_range_is_linear() {
        let (domain, range) = PARALLAX;
        assert_eq!(interpolate(0.0, domain, range, false), -100.0);
        assert_eq!(interpolate(0.5, domain, range, false), 0.0);
        assert_eq!(interpolate(1.0, domain, range, false), 100.0);
        assert_eq!(interpolate(0.25, domain, range, false), -50.0);
    }

    #[test]
    fn extrapolates_unless_clamped() {
        let (domain, range) = PARALLAX;
        assert_eq!(interpolate(1.5, domain, range, false), 200.0);
        assert_eq!(interpolate(1.5, domain, range, true), 100.0);
        assert_eq!(interpolate(-0.5, domain, range, false), -200.0);
        assert_eq!(interpolate(-0.5, domain, range, true), -100.0);
    }

    #[test]
    fn degenerate_domain_returns_range_start() {
        assert_eq!(interpolate(3.0, (2.0, 2.0), (10.0, 20.0), false), 10.0);
    }

    #[test]
    fn transform_follows_source() {
        let (domain, range) = PARALLAX;
        let progress = MotionValue::new(0.0);
        let offset = transform(&progress, domain, range);
        assert_eq!(offset.get(), -100.0);

        progress.set(0.5);
        assert_eq!(offset.get(), 0.0);

        progress.set(1.0);
        assert_eq!(offset.get(), 100.0);
    }

    #[test]
    fn dropping_derived_value_releases_source() {
        let progress = MotionValue::new(0.0);
        let offset = transform(&progress, (0.0, 1.0), (0.0, 10.0));
        assert_eq!(progress.subscriber_count(), 1);

        drop(offset);
        assert_eq!(progress.subscriber_count(), 0);
    }
}
