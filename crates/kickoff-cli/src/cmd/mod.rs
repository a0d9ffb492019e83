pub mod level;
pub mod nav;
pub mod reset;
pub mod section;
pub mod sink;
pub mod status;
pub mod submit;
pub mod toggle;
