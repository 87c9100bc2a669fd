pub mod keyboard;
pub mod openrussian;
pub mod source;
pub mod yandex;

pub use keyboard::translate;
pub use source::DictionarySource;
