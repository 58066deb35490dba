//! Render-facing surface of the calculator core.
//!
//! Presentation is out of scope for this crate; this layer only defines the
//! view model an embedder renders from:
//!
//! ```text
//! CalcState → compute_viewmodel → DisplayViewModel → embedder's renderer
//! ```

pub mod viewmodel;

pub use viewmodel::DisplayViewModel;
