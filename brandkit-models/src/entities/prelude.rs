pub use super::adjective::{
    ActiveModel as AdjectiveActiveModel, Column as AdjectiveColumn, Entity as Adjective,
    Model as AdjectiveModel,
};
pub use super::brand::{
    ActiveModel as BrandActiveModel, Column as BrandColumn, Entity as Brand, Model as BrandModel,
};
pub use super::personality::{
    ActiveModel as PersonalityActiveModel, Column as PersonalityColumn, Entity as Personality,
    Model as PersonalityModel,
};
pub use super::rule::{
    ActiveModel as RuleActiveModel, Column as RuleColumn, Entity as Rule, Model as RuleModel,
};
