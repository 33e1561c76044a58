#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    Transport(String),
    Application(String),
    MalformedResponse(String),
    Parse(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Transport(detail) => {
                write!(f, "Request failed: {}", detail)
            }
            AnalysisError::Application(message) => {
                write!(f, "API reported an error: {}", message)
            }
            AnalysisError::MalformedResponse(detail) => {
                write!(f, "Malformed response: {}", detail)
            }
            AnalysisError::Parse(detail) => {
                write!(f, "Report is not valid JSON: {}", detail)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
