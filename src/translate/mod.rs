pub mod interface;
pub mod languages;
pub mod google;
pub mod factory;

pub use factory::TranslateFactory;
pub use interface::{TranslateError, TranslateInterface, Translation};
