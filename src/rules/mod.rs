//! Move validation.
//!
//! Stateless predicates deciding whether a card may be placed on a tableau
//! column or a foundation. `Game` consults these before every mutation.

pub mod validator;

pub use validator::{
    check_foundation_move, check_foundation_placement, check_tableau_move,
    foundation_move_allowed, tableau_move_allowed,
};
