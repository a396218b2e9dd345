pub mod chat;
pub mod page;
pub mod shared;

pub use chat::ChatPanel;
pub use page::ChatPage;
