pub mod category;
pub mod question;

pub use category::Category;
pub use question::{NewQuestion, Question};
