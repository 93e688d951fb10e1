//! Use cases - orchestration over the pure pricing and derivation domain.

pub mod character_sheet;

pub use character_sheet::{CharacterSheetError, CharacterSheetUseCases, SheetReport};
