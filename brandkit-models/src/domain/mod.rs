#[allow(clippy::needless_update)]
mod adjective;
#[allow(clippy::needless_update)]
mod brand;
mod common;
mod dashboard;
#[allow(clippy::needless_update)]
mod personality;
pub mod prelude;
#[allow(clippy::needless_update)]
mod rule;
