pub mod gender;
pub mod history;
pub mod measurement;
pub mod patient;
pub mod protocol;
pub mod result;
pub mod site;
