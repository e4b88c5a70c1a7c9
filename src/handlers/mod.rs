pub mod info;
pub mod params;
pub mod tools;

pub use info::{info_handler, manifest_handler, root_handler};
pub use tools::{
    add_handler, analyze_text_handler, hello_handler, multiply_handler, sqrt_handler,
    temp_convert_handler,
};
