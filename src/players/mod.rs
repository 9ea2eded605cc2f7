pub mod fish;
pub use fish::*;

pub mod rock;
pub use rock::*;

pub mod station;
pub use station::*;
