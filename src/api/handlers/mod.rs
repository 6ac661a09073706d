pub mod archives;
pub mod health;
