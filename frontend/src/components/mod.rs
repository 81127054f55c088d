pub mod forms;
pub mod header;
pub mod notification_banner;
pub mod timeline;
pub mod timeline_card;
