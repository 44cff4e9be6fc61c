//! HTTP request handlers.

pub mod health;
pub mod lengthen;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod visits;

pub use health::health_handler;
pub use lengthen::lengthen_handler;
pub use links::list_links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use visits::visits_handler;
