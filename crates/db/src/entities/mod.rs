//! `SeaORM` entity definitions.

pub mod administrators;
pub mod guardians;
pub mod payments;
pub mod students;
