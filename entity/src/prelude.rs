pub use super::bot::Entity as Bot;
pub use super::message::Entity as Message;
