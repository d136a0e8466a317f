pub mod ascii;
pub mod contractions;
pub mod dictionary;
pub mod loader;
pub mod numbers;
pub mod processor;

pub use ascii::AsciiFoldDictionary;
pub use contractions::ContractionDictionary;
pub use dictionary::{LoadError, TermDictionary};
pub use loader::TermDictionaryLoader;
pub use numbers::NumberDictionary;
pub use processor::EnglishProcessor;
