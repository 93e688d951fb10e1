//! Domain entities - the character document and its priced parts

mod character;
mod equipment;
mod power;
mod power_kind;
mod priced;

pub use character::{BasicConfiguration, Character, Characteristic, Disadvantage};
pub use equipment::Equipment;
pub use power::Power;
pub use power_kind::{classify_by_name, classify_by_type, PowerClass, PowerKind, NAME_TABLE, TYPE_TABLE};
pub use priced::{Adder, Modifier, Priced, PricedEntity};
