//! Accessibility checks (best effort).
//!
//! Only metrics the usage supplies are checked; absent metrics are not
//! violations. Constraints are filtered by platform and scope first.

use catalog_model::{
    AccessibilityConstraint, CandidateUsage, ComponentDescriptor, ConstraintKind,
    ConstraintScope, MetricValue, PropType, UsageMetrics,
};
use catalog_standards::TokenStore;

use crate::issue::{Finding, MetricKind, Violation};

pub fn check(
    tokens: &TokenStore,
    descriptor: &ComponentDescriptor,
    usage: &CandidateUsage,
) -> Vec<Violation> {
    let Some(metrics) = &usage.metrics else {
        return Vec::new();
    };

    let interactive = is_interactive(descriptor, usage);
    let mut violations = Vec::new();

    for constraint in &descriptor.accessibility {
        if !constraint.platform.admits(usage.platform) {
            continue;
        }
        if constraint.scope == ConstraintScope::Interactive && !interactive {
            continue;
        }

        let ctx = Ctx {
            tokens,
            component: &descriptor.name,
            constraint,
        };
        match &constraint.kind {
            ConstraintKind::MinTouchTarget { min_px } => {
                ctx.touch_target(metrics, *min_px, &mut violations)
            }
            ConstraintKind::ContrastRatio { min_ratio } => {
                ctx.contrast(metrics, *min_ratio, &mut violations)
            }
            ConstraintKind::AriaAttributeRequired { attribute } => {
                ctx.aria(metrics, attribute, &mut violations)
            }
        }
    }

    tracing::debug!(
        component = %descriptor.name,
        interactive,
        violations = violations.len(),
        "accessibility checked"
    );
    violations
}

/// A usage is interactive when it wires up any function-reference prop.
fn is_interactive(descriptor: &ComponentDescriptor, usage: &CandidateUsage) -> bool {
    usage.props.iter().any(|(name, value)| {
        !value.is_null()
            && descriptor
                .prop(name)
                .is_some_and(|prop| prop.prop_type == PropType::FunctionReference)
    })
}

struct Ctx<'a> {
    tokens: &'a TokenStore,
    component: &'a str,
    constraint: &'a AccessibilityConstraint,
}

impl Ctx<'_> {
    fn touch_target(&self, metrics: &UsageMetrics, min_px: f64, out: &mut Vec<Violation>) {
        for (dimension, value) in [("width", &metrics.width), ("height", &metrics.height)] {
            let Some(value) = value else {
                continue;
            };
            let actual_px = match value {
                MetricValue::Number(px) => *px,
                MetricValue::Text(reference) => match self.tokens.resolve_pixels(reference) {
                    Ok(px) => px,
                    Err(_) => {
                        out.push(self.not_found(dimension, reference, MetricKind::Length));
                        continue;
                    }
                },
            };
            if actual_px < min_px {
                out.push(self.violation(Finding::TouchTarget {
                    dimension: dimension.to_string(),
                    actual_px,
                    min_px,
                }));
            }
        }
    }

    fn contrast(&self, metrics: &UsageMetrics, min_ratio: f64, out: &mut Vec<Violation>) {
        let (Some(foreground), Some(background)) = (&metrics.foreground, &metrics.background)
        else {
            return;
        };

        // A translucent foreground is measured as painted over the background.
        let foreground_rgb = self.tokens.resolve_color_alpha(foreground);
        let background_rgb = self.tokens.resolve_color(background);
        let (foreground_rgb, background_rgb) = match (foreground_rgb, background_rgb) {
            (Ok((fg, alpha)), Ok(bg)) => (fg.over(alpha, &bg), bg),
            (fg, bg) => {
                if fg.is_err() {
                    out.push(self.not_found("foreground", foreground, MetricKind::Color));
                }
                if bg.is_err() {
                    out.push(self.not_found("background", background, MetricKind::Color));
                }
                return;
            }
        };

        let ratio = foreground_rgb.contrast_ratio(&background_rgb);
        if ratio < min_ratio {
            out.push(self.violation(Finding::Contrast {
                foreground: foreground_rgb,
                background: background_rgb,
                ratio,
                min_ratio,
            }));
        }
    }

    fn aria(&self, metrics: &UsageMetrics, attribute: &str, out: &mut Vec<Violation>) {
        let Some(aria) = &metrics.aria else {
            return;
        };
        let present = aria
            .get(attribute)
            .is_some_and(|value| !value.trim().is_empty());
        if !present {
            out.push(self.violation(Finding::MissingAria {
                attribute: attribute.to_string(),
            }));
        }
    }

    fn violation(&self, finding: Finding) -> Violation {
        Violation::AccessibilityViolation {
            component: self.component.to_string(),
            platform: self.constraint.platform,
            finding,
        }
    }

    fn not_found(&self, metric: &str, reference: &str, expected: MetricKind) -> Violation {
        Violation::NotFound {
            component: self.component.to_string(),
            metric: metric.to_string(),
            reference: reference.to_string(),
            expected,
        }
    }
}
