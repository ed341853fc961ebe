// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Selection and gesture interaction for a three-body scene.
//!
//! Orrery routes pointer input to one of three selectable bodies (Earth,
//! Mars, Moon), turns clicks on a hovered body into navigation requests,
//! drives per-frame visual feedback, and cycles a gesture selection from
//! leftward index-finger swipes detected by a hand-pose model.
//!
//! # Key entry points
//!
//! - [`session::Session`] - owns the scene, camera, controller, and frame
//!   loop for one interactive session
//! - [`controller::InteractionController`] - hover state, gesture cycle,
//!   and feedback
//! - [`gesture`] - landmark frames, the swipe state machine, and the
//!   estimator polling task
//! - [`options::Options`] - runtime configuration (camera, scene, feedback,
//!   gesture, navigation)
//!
//! # Architecture
//!
//! Everything runs on one thread. Pointer events are handled synchronously
//! as they arrive. Once per rendered frame the [`schedule::FrameScheduler`]
//! runs its tasks: the feedback task applies hover scale and spin, and the
//! gesture task polls the in-flight hand estimate without blocking, feeding
//! resolved frames to the swipe state machine.

pub mod camera;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod gesture;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod scene;
pub mod schedule;
pub mod session;
pub mod target;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use controller::{GestureStatus, InteractionController};
pub use error::OrreryError;
pub use input::{HoverState, InputEvent, MouseButton};
pub use navigation::{NavigationAction, Navigator};
pub use options::Options;
pub use session::Session;
pub use target::Target;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
