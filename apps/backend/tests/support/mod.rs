pub mod app_builder;
pub mod auth;
pub mod factory;
pub mod logging;

pub use app_builder::create_test_app;

// Auto-initialize logging for integration tests
#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}
