//! External service clients.

pub mod printful;

pub use printful::{CreatedOrder, PrintfulClient, PrintfulError};
