use crate::{
    foundation::core::{Affine, Vec2, Viewport},
    layout::model::DoorBox,
};

/// Share of the viewport a focused door fills along its limiting axis.
pub const ZOOM_FILL: f64 = 0.8;

/// Camera state over the layout.
///
/// Applied as `translate(translateX, translateY) scale(scale)` around the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// Zoomed out.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Fit `door` into 80% of the viewport and move its centre to the viewport centre.
    pub fn focus(door: DoorBox, viewport: Viewport) -> Self {
        let vw = f64::from(viewport.width);
        let vh = f64::from(viewport.height);
        if !(door.width > 0.0 && door.height > 0.0) {
            return Self::IDENTITY;
        }

        let scale = (ZOOM_FILL * vw / door.width).min(ZOOM_FILL * vh / door.height);
        let (cx, cy) = door.center();
        Self {
            scale,
            translate_x: (vw * 0.5 - cx) * scale,
            translate_y: (vh * 0.5 - cy) * scale,
        }
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Layout space to screen space, with the transform origin at the viewport centre.
    pub fn to_affine(self, viewport: Viewport) -> Affine {
        let origin = viewport.center().to_vec2();
        Affine::translate(origin)
            * Affine::translate(Vec2::new(self.translate_x, self.translate_y))
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/zoom/transform.rs"]
mod tests;
