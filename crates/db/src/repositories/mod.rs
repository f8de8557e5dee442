//! Repository abstractions for data access.

pub mod administrator;
pub mod guardian;
pub mod payment;
pub mod student;

pub use administrator::AdministratorRepository;
pub use guardian::GuardianRepository;
pub use payment::{CreatePaymentInput, PaymentError, PaymentRepository};
pub use student::StudentRepository;
