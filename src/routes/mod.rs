pub mod news_routes;
pub mod render;
pub mod system_routes;
