//! Terminal prompt implementation

mod inquire_prompter;

pub use inquire_prompter::InquirePrompter;
