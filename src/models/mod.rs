pub mod language;
pub mod loaders;
pub mod question;

pub use language::Language;
pub use loaders::{load_questions, save_questions};
pub use question::Question;
