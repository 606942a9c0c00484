//! Data access for the brand tables.
//!
//! Every function takes the connection (or transaction) to run on, and every
//! scoped query takes the owning `brand_id`; no global handle is consulted.

pub mod adjective;
pub mod brand;
pub mod personality;
pub mod rule;

pub use adjective::AdjectiveRepository;
pub use brand::BrandRepository;
pub use personality::PersonalityRepository;
pub use rule::RuleRepository;
