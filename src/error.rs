/// Rejected form input. The message is what the user sees in the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Inputs have to be positive numbers")]
    NotFinite,
    #[error("Inputs have to be positive numbers")]
    NotPositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("geolocation is not available")]
    Unavailable,
}
