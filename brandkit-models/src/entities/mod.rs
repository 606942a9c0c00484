//! `SeaORM` entities for the four brand tables.

pub mod adjective;
pub mod brand;
pub mod personality;
pub mod prelude;
pub mod rule;
