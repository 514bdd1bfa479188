pub mod calendar;
pub mod compass;
pub mod records;
pub mod timestamp;
pub mod uv_category;
pub mod weather_type;
