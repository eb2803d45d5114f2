use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("facility configuration error: {0}")]
    Config(String),

    #[error("facility has no stages")]
    NoStages,

    #[error("stage {0} has no stations")]
    EmptyStage(usize),

    #[error("station {id:?}: {what} must be a positive integer")]
    NonPositive {
        id:   String,
        what: &'static str,
    },

    #[error("station {0:?} is defined more than once")]
    DuplicateStation(String),

    #[error("stage {stage} references unknown station {id:?}")]
    UnknownStation {
        stage: usize,
        id:    String,
    },

    #[error("station {0:?} appears in more than one stage")]
    StationReused(String),

    #[error("stage {0} total weight does not fit in u32")]
    WeightOverflow(usize),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FacilityResult<T> = Result<T, FacilityError>;
