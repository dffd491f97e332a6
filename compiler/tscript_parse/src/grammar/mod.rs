//! Grammar productions, split into expression and statement halves.
//!
//! Both extend [`crate::Parser`] with methods; the cursor is the only state.

mod expr;
mod stmt;
