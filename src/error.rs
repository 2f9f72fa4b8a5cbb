use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Route cannot connect stop {0:?} to itself")]
    SelfRoute(String),
}
