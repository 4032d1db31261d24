//! 预导入模块，方便使用

pub use super::agreements::{
    ActiveModel as AgreementActiveModel, Entity as Agreements, Model as AgreementModel,
};
pub use super::contracts::{
    ActiveModel as ContractActiveModel, Entity as Contracts, Model as ContractModel,
};
pub use super::debits::{ActiveModel as DebitActiveModel, Entity as Debits, Model as DebitModel};
pub use super::discharges::{
    ActiveModel as DischargeActiveModel, Entity as Discharges, Model as DischargeModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::payments::{
    ActiveModel as PaymentActiveModel, Entity as Payments, Model as PaymentModel,
};
pub use super::persons::{ActiveModel as PersonActiveModel, Entity as Persons, Model as PersonModel};
pub use super::profiles::{
    ActiveModel as ProfileActiveModel, Entity as Profiles, Model as ProfileModel,
};
pub use super::relationships::{
    ActiveModel as RelationshipActiveModel, Entity as Relationships, Model as RelationshipModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
