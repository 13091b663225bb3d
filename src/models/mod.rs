mod article;
mod user;

pub use self::{article::*, user::*};
