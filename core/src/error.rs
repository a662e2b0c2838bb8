use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurpriseError {
    #[error("Invalid egg index {0}, there are only {count} eggs", count = crate::EGG_COUNT)]
    InvalidEgg(usize),
}

pub type Result<T> = core::result::Result<T, SurpriseError>;
