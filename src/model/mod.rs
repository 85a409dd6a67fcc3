//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Input text, results and comparison examples
//! - `Tab` / `Focus` - Presentation state
//! - `ModalStack` - Modal overlay management

pub mod domain;
pub mod examples;
pub mod input;
pub mod modal;
pub mod results;
pub mod ui;

// Re-export commonly used types
pub use domain::DomainState;
pub use examples::{ExampleRow, ExampleSource, ExampleTable};
pub use input::InputText;
pub use results::{Labeled, ProcessOutcome, ResultSet};
pub use ui::{Focus, Tab};
