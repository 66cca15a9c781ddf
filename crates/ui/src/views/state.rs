#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "We couldn't find that page.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
