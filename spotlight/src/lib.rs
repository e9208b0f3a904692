pub mod config;
pub mod controller;
pub mod dom;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod height;
pub mod page;
pub mod platform;
pub mod scroll;
pub mod viewport;
pub mod waiter;

pub use config::SpotlightConfig;
pub use controller::{Outcome, Spotlight, ToggleState};
pub use dom::{Dom, DomResult};
pub use element::{Element, ElementKind};
pub use error::{ConfigError, DomError, MountError};
pub use event::Event;
pub use geometry::Rect;
pub use height::{HeightQuery, HeightStabilizer};
pub use page::Page;
pub use platform::{CompletionFamily, EventNames, Standard, VendorPrefixed};
pub use scroll::{ScrollCompensator, ScrollSnapshot};
pub use viewport::{current_scroll_offset, is_fully_visible, viewport_height};
pub use waiter::{CompletionWaiter, Continuation, Subscription, TransitionRequest};
