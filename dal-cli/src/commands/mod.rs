pub mod generate;
pub mod input;
pub mod inspect;
