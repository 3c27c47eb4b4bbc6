//! A demo comparing ways a view can own its state.
//!
//! [`app::RootView`] shows a random number that re-draws on click, followed
//! by a counter. The counter's state is owned with one of the
//! [`config::Strategy`] variants, chosen at startup.
pub mod app;
pub mod config;
pub mod counter;
pub mod random_number;
pub mod report;

pub use app::RootView;
pub use config::{DemoConfig, Strategy};
pub use counter::INCREMENT_ID;
pub use random_number::RANDOMIZE_ID;
