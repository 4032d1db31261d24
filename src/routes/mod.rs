pub mod agreements;

pub mod contracts;

pub mod debits;

pub mod discharges;

pub mod enrollments;

pub mod files;

pub mod grades;

pub mod payments;

pub mod persons;

pub mod profiles;

pub mod sessions;

pub mod students;

pub mod users;

pub use agreements::configure_agreement_routes;
pub use contracts::configure_contract_routes;
pub use debits::configure_debit_routes;
pub use discharges::configure_discharge_routes;
pub use enrollments::configure_enrollment_routes;
pub use files::configure_file_routes;
pub use grades::configure_grade_routes;
pub use payments::configure_payment_routes;
pub use persons::configure_person_routes;
pub use profiles::configure_profile_routes;
pub use sessions::configure_session_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
