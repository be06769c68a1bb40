use nalgebra::Vector2;

pub type Vector2D = Vector2<f64>;

#[inline(always)]
pub fn vector2d(x: f64, y: f64) -> Vector2D {
    Vector2D::new(x, y)
}

/// Converts a plot-space vector into egui's `f32` position space.
#[inline(always)]
pub fn vector2d_to_xy(vector: &Vector2D) -> [f32; 2] {
    [
        vector.x as f32,
        vector.y as f32,
    ]
}
