pub mod field;
pub mod field12;
pub mod field2;
pub mod field4;
pub mod field6;
pub mod field_element;
pub mod field_params;
