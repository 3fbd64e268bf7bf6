pub mod input_showcase;

pub use input_showcase::InputShowcasePage;
