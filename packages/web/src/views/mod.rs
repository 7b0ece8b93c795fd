mod home;
pub use home::Home;

mod register;
pub use register::Register;

mod confirmation;
pub use confirmation::Confirmation;

mod admin;
pub use admin::Admin;
