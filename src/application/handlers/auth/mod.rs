//! Authorization command handlers.

mod complete_authorization;

pub use complete_authorization::{
    CompleteAuthorizationCommand, CompleteAuthorizationError, CompleteAuthorizationHandler,
};
