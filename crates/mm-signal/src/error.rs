use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    /// A schedule boundary was negative.  Boundaries are tick offsets into
    /// the cycle and must be `>= 0`.
    #[error("invalid signal schedule: {start_green}/{start_yellow}/{start_red}")]
    InvalidSchedule {
        start_green: i64,
        start_yellow: i64,
        start_red: i64,
    },
}

pub type SignalResult<T> = Result<T, SignalError>;
