//! HTTP request handlers for API endpoints.

pub mod health;
pub mod index;
pub mod redirect;
pub mod shorturl;

pub use health::health_handler;
pub use index::index_handler;
pub use redirect::redirect_handler;
pub use shorturl::create_short_url_handler;
