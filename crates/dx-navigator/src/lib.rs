//! In-page navigation for dx.
//!
//! Internal links swap the content and sidebar regions instead of loading a
//! whole page. Any failure along the way degrades to an ordinary page load.
//!
//! - [`Navigator`]: the navigation state machine (idle, fetching, full load)
//! - [`PageController`]: owns the [`PageView`](dx_page::PageView), the
//!   navigator and the project selector, and drives tagging and rendering
//! - [`PageFetcher`] / [`Browser`]: the network and browser side effects
//!
//! Network operations are split into begin/complete pairs so an event loop
//! can run them asynchronously; [`PageController::navigate`] is the blocking
//! convenience driver.
//!
//! # Features
//!
//! - `mock`: [`MockFetcher`] and [`RecordingBrowser`] test doubles

mod browser;
mod controller;
mod error;
mod fetch;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod navigator;

pub use browser::Browser;
pub use controller::{ControllerOptions, PageController};
pub use error::{NavigatorError, NetworkError};
pub use fetch::{PageFetcher, UreqFetcher};
#[cfg(any(test, feature = "mock"))]
pub use mock::{BrowserEvent, MockFetcher, RecordingBrowser};
pub use navigator::{LinkTarget, NavState, Navigation, Navigator, Step};
