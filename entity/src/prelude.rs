pub use super::language::Entity as Language;
pub use super::message::Entity as Message;
pub use super::message_tag::Entity as MessageTag;
pub use super::tag::Entity as Tag;
