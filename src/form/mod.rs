//! Live form handling on top of the validation engine.
//!
//! `FormSession` owns the field values and the derived display state
//! (per-field status, strength meter, submit gate, success message) and runs
//! the submit state machine in `state`.

mod session;
mod state;


pub use session::{FieldIndicator, FieldStatus, FormSession, FormView, SUCCESS_MESSAGE};
pub use state::{FormState, SubmitOutcome, submit};
