// arkbrowser services
// Services are stateless or shared helpers: request filtering, URL resolution, the browsing profile and settings persistence.

pub mod navigation_resolver;
pub mod profile;
pub mod request_filter;
pub mod settings_store;
pub mod sqlite_store;
