//! Access guards shared by every controller.
//!
//! Each guard returns `Result<_, Error>` and controllers call them in a fixed order with `?`,
//! so the first failing guard decides the response:
//!
//! 1. session consistency ([`session::session_consistency`], applied as middleware)
//! 2. login state ([`session::require_logged_in`] / [`session::require_logged_out`])
//! 3. existence of the addressed record ([`ownership::require_exists`])
//! 4. ownership of the addressed record ([`ownership::require_owner`])
//! 5. request body shape & field validation
//! 6. lifecycle & referential checks ([`lifecycle::require_active`],
//!    [`reference::require_reference_owned`])
//!
//! Guards read and then act without a transaction, a concurrent request may change the
//! record between the check and the write.

pub mod lifecycle;
pub mod ownership;
pub mod reference;
pub mod session;
