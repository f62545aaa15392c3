pub mod complex;
pub mod errors;
pub mod math_rect;
pub mod pixel_selection;
pub mod point;
pub mod raster;
pub mod rect;
pub mod window;
