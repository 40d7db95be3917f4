mod categories;
mod transform;

pub use categories::category_name;
pub use transform::build_quiz;
