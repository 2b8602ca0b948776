pub mod cookies;

pub use cookies::CookiesExtractor;
