use dioxus::html::geometry::PixelsRect;

/// Stacking order of the detached list, above ordinary page content.
pub const OVERLAY_Z_INDEX: i32 = 10_000;

/// Zero-size layer pinned to the viewport origin. Measured rects are
/// viewport-relative, so the detached list is placed inside this layer
/// rather than inside whatever positioned ancestor hosts the dropdown.
pub const OVERLAY_LAYER_CSS: &str = "position: fixed; top: 0; left: 0; width: 0; height: 0;";

/// The parts of the control's on-screen rectangle the list needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

impl From<PixelsRect> for ControlRect {
    fn from(rect: PixelsRect) -> Self {
        Self {
            left: rect.origin.x,
            bottom: rect.origin.y + rect.size.height,
            width: rect.size.width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayStyle {
    /// Control not measured yet, apply nothing this frame.
    #[default]
    Unavailable,
    Absolute { top: f64, left: f64, z_index: i32 },
}

impl OverlayStyle {
    pub fn to_css(&self) -> String {
        match self {
            OverlayStyle::Unavailable => String::new(),
            OverlayStyle::Absolute { top, left, z_index } => {
                format!("position: absolute; top: {top}px; left: {left}px; z-index: {z_index};")
            }
        }
    }
}

/// Where the detached list goes: directly under the control, left edges aligned.
pub fn overlay_style(rect: Option<ControlRect>) -> OverlayStyle {
    match rect {
        Some(rect) => OverlayStyle::Absolute {
            top: rect.bottom,
            left: rect.left,
            z_index: OVERLAY_Z_INDEX,
        },
        None => OverlayStyle::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchors_below_the_control() {
        let rect = ControlRect {
            left: 10.0,
            bottom: 50.0,
            width: 200.0,
        };

        assert_eq!(
            overlay_style(Some(rect)),
            OverlayStyle::Absolute {
                top: 50.0,
                left: 10.0,
                z_index: 10_000,
            }
        );
        assert_eq!(
            overlay_style(Some(rect)).to_css(),
            "position: absolute; top: 50px; left: 10px; z-index: 10000;"
        );
    }

    #[test]
    fn unmeasured_control_yields_empty_style() {
        assert_eq!(overlay_style(None), OverlayStyle::Unavailable);
        assert_eq!(overlay_style(None).to_css(), "");
    }

    #[test]
    fn repeated_calls_agree() {
        let rect = Some(ControlRect {
            left: 3.5,
            bottom: 7.25,
            width: 1.0,
        });
        assert_eq!(overlay_style(rect), overlay_style(rect));
    }
}
