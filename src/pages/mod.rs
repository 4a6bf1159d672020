pub mod about;
pub mod contact;
pub mod help;
pub mod home;
pub mod loading;
pub mod navbar;
pub mod projects;
pub mod skills;
