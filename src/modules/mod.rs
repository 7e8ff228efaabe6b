pub mod analytics;
pub mod exams;
pub mod marks;
pub mod publications;
pub mod rankings;
pub mod results;
pub mod schools;
pub mod students;
