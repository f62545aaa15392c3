pub mod normalize_selection;
pub mod pixel_to_math;
