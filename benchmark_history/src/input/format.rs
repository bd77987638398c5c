//!
//! Input benchmark run format.
//!

///
/// Input benchmark run format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A run record in the dashboard data model.
    #[default]
    Json,
    /// Raw `go test -bench` output.
    Go,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "go" => Ok(Self::Go),
            string => anyhow::bail!(
                "Unknown input format `{string}`. Supported formats: {}",
                vec![Self::Json, Self::Go]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Go => write!(f, "go"),
        }
    }
}
