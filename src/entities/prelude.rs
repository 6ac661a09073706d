pub use super::media_items::Entity as MediaItems;
